//! Plays a parsed script against a fresh mediator.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, info};
use yoriai_mediator::Mediator;

use crate::{
    client::{ChatModerator, ChatParticipant},
    config::ChatConfig,
    domain::{
        ChatRoom, InvalidArgumentError, MessageContent, MessageSink, Participant, ParticipantName,
        RoomName,
    },
    error::ChatError,
    infrastructure::{
        dto::{ParticipantTranscriptDto, QueryResultDto, SessionReportDto, TranscriptEntryDto},
        writer::{InMemoryTranscript, TeeMessageWriter, TracingMessageWriter},
    },
    ui::script::{ScriptLine, ScriptStep},
    usecase::register_chat_handlers,
};

struct SessionMember {
    participant: Arc<ChatParticipant>,
    transcript: Arc<InMemoryTranscript>,
}

/// Owns one chat session: the mediator, the rooms and the participants.
///
/// Rooms and participants are created the first time a script mentions
/// them. When the configuration names banned words, a [`ChatModerator`] is
/// registered and its room exists from the start. The runner is the only
/// owner of the rooms, so dropping it frees the whole session.
pub struct SessionRunner {
    config: ChatConfig,
    mediator: Arc<Mediator>,
    rooms: HashMap<String, Arc<ChatRoom>>,
    members: HashMap<String, SessionMember>,
    // first-mention order, for the report
    member_order: Vec<String>,
    moderator: Option<Arc<ChatModerator>>,
}

impl SessionRunner {
    /// Build a session with the built-in handlers registered.
    ///
    /// # Errors
    ///
    /// - `ChatError::Registration` if the handlers cannot be registered
    /// - `ChatError::InvalidArgument` if the moderator room or name is invalid
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let mediator = Arc::new(Mediator::new());
        register_chat_handlers(&mediator)?;

        let mut runner = Self {
            config,
            mediator,
            rooms: HashMap::new(),
            members: HashMap::new(),
            member_order: Vec::new(),
            moderator: None,
        };

        if runner.config.moderation_enabled() {
            let room_name = runner.config.moderator_room.clone();
            let room = runner.room(&room_name)?;
            let name = ParticipantName::with_limit(
                runner.config.moderator_name.clone(),
                runner.config.max_name_length,
            )?;
            let moderator = ChatModerator::with_limit(
                name,
                &room,
                runner.config.banned_words.clone(),
                runner.config.max_message_length,
            );
            runner.mediator.register(Arc::clone(&moderator))?;
            info!(
                room = %room_name,
                words = runner.config.banned_words.len(),
                "moderator installed"
            );
            runner.moderator = Some(moderator);
        }

        Ok(runner)
    }

    pub fn mediator(&self) -> &Arc<Mediator> {
        &self.mediator
    }

    pub fn moderator(&self) -> Option<&Arc<ChatModerator>> {
        self.moderator.as_ref()
    }

    /// Play `steps` in order and collect the report.
    ///
    /// # Errors
    ///
    /// Stops at the first step whose names or text are invalid
    /// (`ChatError::InvalidStep`) or whose query has no handler.
    pub fn run(&mut self, steps: &[ScriptLine]) -> Result<SessionReportDto, ChatError> {
        let mut queries = Vec::new();
        for ScriptLine { line, step } in steps {
            debug!(line, ?step, "running script step");
            if let Some(result) = self.run_step(*line, step)? {
                queries.push(result);
            }
        }
        Ok(SessionReportDto {
            queries,
            transcripts: self.transcripts(),
        })
    }

    fn run_step(
        &mut self,
        line: usize,
        step: &ScriptStep,
    ) -> Result<Option<QueryResultDto>, ChatError> {
        let at_line = |source| ChatError::InvalidStep { line, source };
        match step {
            ScriptStep::Join { participant, room } => {
                let (participant, room) = self.resolve(participant, room).map_err(at_line)?;
                participant.join(&room);
                Ok(None)
            }
            ScriptStep::Leave { participant, room } => {
                let (participant, room) = self.resolve(participant, room).map_err(at_line)?;
                participant.leave(&room);
                Ok(None)
            }
            ScriptStep::Say {
                participant,
                room,
                text,
            } => {
                let (participant, room) = self.resolve(participant, room).map_err(at_line)?;
                let content =
                    MessageContent::with_limit(text.clone(), self.config.max_message_length)
                        .map_err(at_line)?;
                participant.send_content_to(&room, content);
                Ok(None)
            }
            ScriptStep::Participants { participant, room } => {
                let (requester, chat_room) = self.resolve(participant, room).map_err(at_line)?;
                let participants = requester
                    .list_participants_of(&chat_room)?
                    .iter()
                    .map(|p| p.name().to_string())
                    .collect();
                Ok(Some(QueryResultDto::Participants {
                    line,
                    requester: participant.clone(),
                    room: room.clone(),
                    participants,
                }))
            }
            ScriptStep::Messages { participant, room } => {
                let (requester, chat_room) = self.resolve(participant, room).map_err(at_line)?;
                let messages = requester
                    .list_messages_of(&chat_room)?
                    .iter()
                    .map(|message| TranscriptEntryDto::new(chat_room.name(), message))
                    .collect();
                Ok(Some(QueryResultDto::Messages {
                    line,
                    requester: participant.clone(),
                    room: room.clone(),
                    messages,
                }))
            }
        }
    }

    fn resolve(
        &mut self,
        participant: &str,
        room: &str,
    ) -> Result<(Arc<ChatParticipant>, Arc<ChatRoom>), InvalidArgumentError> {
        Ok((self.participant(participant)?, self.room(room)?))
    }

    fn participant(&mut self, name: &str) -> Result<Arc<ChatParticipant>, InvalidArgumentError> {
        if let Some(member) = self.members.get(name) {
            return Ok(Arc::clone(&member.participant));
        }
        let participant_name =
            ParticipantName::with_limit(name.to_string(), self.config.max_name_length)?;
        let transcript = Arc::new(InMemoryTranscript::new());
        let sink: Arc<dyn MessageSink> = if self.config.log_deliveries {
            let logger = TracingMessageWriter::new(participant_name.clone());
            let sinks: Vec<Arc<dyn MessageSink>> = vec![transcript.clone(), Arc::new(logger)];
            Arc::new(TeeMessageWriter::new(sinks))
        } else {
            transcript.clone()
        };
        let participant = ChatParticipant::new(Arc::clone(&self.mediator), participant_name, sink);
        debug!(participant = name, "participant created");
        self.members.insert(
            name.to_string(),
            SessionMember {
                participant: Arc::clone(&participant),
                transcript,
            },
        );
        self.member_order.push(name.to_string());
        Ok(participant)
    }

    fn room(&mut self, name: &str) -> Result<Arc<ChatRoom>, InvalidArgumentError> {
        if let Some(room) = self.rooms.get(name) {
            return Ok(Arc::clone(room));
        }
        let room_name = RoomName::with_limit(name.to_string(), self.config.max_name_length)?;
        let room = Arc::new(ChatRoom::new(room_name));
        debug!(room = name, "room created");
        self.rooms.insert(name.to_string(), Arc::clone(&room));
        Ok(room)
    }

    fn transcripts(&self) -> Vec<ParticipantTranscriptDto> {
        self.member_order
            .iter()
            .filter_map(|name| self.members.get(name).map(|member| (name, member)))
            .map(|(name, member)| ParticipantTranscriptDto {
                participant: name.clone(),
                received: member
                    .transcript
                    .entries()
                    .iter()
                    .map(TranscriptEntryDto::from)
                    .collect(),
            })
            .collect()
    }
}
