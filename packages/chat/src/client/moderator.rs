//! A moderator that watches every room for banned words.
//!
//! The moderator is two things at once: a [`Participant`] (it has an identity
//! and is the sender of its reports) and a [`CommandHandler`] for
//! [`SendChatMessageCommand`] (it sees every message sent through the
//! mediator it is registered with).

use std::{
    fmt,
    sync::{Arc, Weak},
};

use tracing::{debug, info, trace, warn};
use yoriai_mediator::{CommandHandler, Mediator};

use crate::{
    domain::{
        ChatMessage, ChatRoom, DEFAULT_MAX_MESSAGE_LENGTH, MessageContent, Participant,
        ParticipantId, ParticipantIdFactory, ParticipantName, RoomId,
    },
    usecase::SendChatMessageCommand,
};

/// Appended to a report whose quoted text was cut to fit the message limit
const TRUNCATION_MARKER: char = '…';

pub struct ChatModerator {
    id: ParticipantId,
    name: ParticipantName,
    // Weak: the room's members reach the mediator, and the mediator's
    // registry owns this moderator.
    moderator_room: Weak<ChatRoom>,
    moderator_room_id: RoomId,
    banned_words: Vec<String>,
    max_report_length: usize,
}

impl ChatModerator {
    /// Create a moderator reporting to `moderator_room`.
    ///
    /// Register the returned handle with the mediator to start moderating:
    /// `mediator.register(moderator.clone())`. The moderator does not keep
    /// the room alive; reports stop once the caller drops it.
    pub fn new(
        name: ParticipantName,
        moderator_room: &Arc<ChatRoom>,
        banned_words: Vec<String>,
    ) -> Arc<Self> {
        Self::with_limit(name, moderator_room, banned_words, DEFAULT_MAX_MESSAGE_LENGTH)
    }

    /// Create a moderator whose reports are at most `max_report_length`
    /// characters.
    pub fn with_limit(
        name: ParticipantName,
        moderator_room: &Arc<ChatRoom>,
        banned_words: Vec<String>,
        max_report_length: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: ParticipantIdFactory::generate(),
            name,
            moderator_room: Arc::downgrade(moderator_room),
            moderator_room_id: *moderator_room.id(),
            banned_words,
            max_report_length,
        })
    }

    /// The report room, if it is still alive.
    pub fn moderator_room(&self) -> Option<Arc<ChatRoom>> {
        self.moderator_room.upgrade()
    }

    pub fn banned_words(&self) -> &[String] {
        &self.banned_words
    }

    /// First banned word contained in `text` (case-sensitive).
    fn find_banned_word(&self, text: &str) -> Option<&str> {
        self.banned_words
            .iter()
            .map(String::as_str)
            .find(|word| !word.is_empty() && text.contains(word))
    }

    /// Report text, cut to `max_report_length` characters with a trailing
    /// marker when the quoted message does not fit.
    fn report_text(&self, chat_room: &ChatRoom, message: &ChatMessage) -> String {
        let report = format!(
            "Bad word found in message sent by '{}' on '{}' in room '{}'\n> {}",
            message.sender_name(),
            message.timestamp().to_rfc3339(),
            chat_room.name(),
            message.content()
        );
        if report.chars().count() <= self.max_report_length {
            return report;
        }
        let keep = self.max_report_length.saturating_sub(1);
        let mut truncated: String = report.chars().take(keep).collect();
        truncated.push(TRUNCATION_MARKER);
        truncated
    }
}

impl Participant for ChatModerator {
    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn name(&self) -> &ParticipantName {
        &self.name
    }

    fn new_message_received_from(&self, chat_room: &ChatRoom, _message: &ChatMessage) {
        trace!(room = %chat_room.name(), "moderator ignores direct deliveries");
    }
}

impl CommandHandler for ChatModerator {
    type Command = SendChatMessageCommand;

    fn handle(&self, command: &SendChatMessageCommand, mediator: &Mediator) {
        let chat_room = command.chat_room();
        let message = command.message();

        // Own reports, and anything said in the moderator room, are never
        // inspected; otherwise a report quoting a banned word would loop.
        if message.sender_id() == &self.id || chat_room.id() == &self.moderator_room_id {
            return;
        }

        let Some(word) = self.find_banned_word(message.content().as_str()) else {
            return;
        };
        info!(
            room = %chat_room.name(),
            from = %message.sender_name(),
            word,
            "banned word found"
        );

        let Some(moderator_room) = self.moderator_room.upgrade() else {
            debug!("moderator room dropped, report not sent");
            return;
        };
        let content = MessageContent::with_limit(
            self.report_text(chat_room, message),
            self.max_report_length,
        );
        let content = match content {
            Ok(content) => content,
            Err(error) => {
                // only reachable with a zero report limit
                warn!(%error, "moderator report could not be built, skipping");
                return;
            }
        };
        let report = ChatMessage::new(self, content);
        mediator.send(SendChatMessageCommand::new(moderator_room, report));
    }
}

impl fmt::Debug for ChatModerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatModerator")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("moderator_room", &self.moderator_room_id)
            .field("banned_words", &self.banned_words)
            .field("max_report_length", &self.max_report_length)
            .finish()
    }
}
