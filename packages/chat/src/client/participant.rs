//! A participant that issues its requests through the mediator.

use std::{fmt, sync::Arc};

use yoriai_mediator::{HandlerNotFoundError, Mediator};

use crate::{
    domain::{
        ChatMessage, ChatRoom, InvalidArgumentError, MessageContent, MessageSink, Participant,
        ParticipantId, ParticipantIdFactory, ParticipantName,
    },
    usecase::{
        JoinChatRoomCommand, LeaveChatRoomCommand, ListMessagesQuery, ListParticipantsQuery,
        SendChatMessageCommand,
    },
};

/// A chat participant.
///
/// Every operation becomes a command or query sent through the shared
/// [`Mediator`]; messages delivered to the participant are forwarded to its
/// [`MessageSink`].
pub struct ChatParticipant {
    id: ParticipantId,
    name: ParticipantName,
    mediator: Arc<Mediator>,
    sink: Arc<dyn MessageSink>,
}

impl ChatParticipant {
    /// Create a participant with a fresh identifier.
    pub fn new(
        mediator: Arc<Mediator>,
        name: ParticipantName,
        sink: Arc<dyn MessageSink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: ParticipantIdFactory::generate(),
            name,
            mediator,
            sink,
        })
    }

    /// Join `chat_room`.
    pub fn join(self: &Arc<Self>, chat_room: &Arc<ChatRoom>) {
        self.mediator.send(JoinChatRoomCommand::new(
            Arc::clone(chat_room),
            self.as_participant(),
        ));
    }

    /// Leave `chat_room`. Leaving a room one is not in does nothing.
    pub fn leave(self: &Arc<Self>, chat_room: &Arc<ChatRoom>) {
        self.mediator.send(LeaveChatRoomCommand::new(
            Arc::clone(chat_room),
            self.as_participant(),
        ));
    }

    /// Send a text message to `chat_room`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentError` if `text` is not valid message content.
    /// Nothing is dispatched in that case.
    pub fn send_message_to(
        &self,
        chat_room: &Arc<ChatRoom>,
        text: impl Into<String>,
    ) -> Result<(), InvalidArgumentError> {
        let content = MessageContent::new(text.into())?;
        self.send_content_to(chat_room, content);
        Ok(())
    }

    /// Send already validated content to `chat_room`.
    pub fn send_content_to(&self, chat_room: &Arc<ChatRoom>, content: MessageContent) {
        let message = ChatMessage::new(self, content);
        self.mediator
            .send(SendChatMessageCommand::new(Arc::clone(chat_room), message));
    }

    /// Current members of `chat_room`, in join order.
    ///
    /// # Errors
    ///
    /// Returns `HandlerNotFoundError` if the mediator has no handler for the
    /// query.
    pub fn list_participants_of(
        self: &Arc<Self>,
        chat_room: &Arc<ChatRoom>,
    ) -> Result<Vec<Arc<dyn Participant>>, HandlerNotFoundError> {
        self.mediator.send(ListParticipantsQuery::new(
            Arc::clone(chat_room),
            self.as_participant(),
        ))
    }

    /// Full message history of `chat_room`.
    ///
    /// # Errors
    ///
    /// Returns `HandlerNotFoundError` if the mediator has no handler for the
    /// query.
    pub fn list_messages_of(
        self: &Arc<Self>,
        chat_room: &Arc<ChatRoom>,
    ) -> Result<Vec<ChatMessage>, HandlerNotFoundError> {
        self.mediator.send(ListMessagesQuery::new(
            Arc::clone(chat_room),
            self.as_participant(),
        ))
    }

    fn as_participant(self: &Arc<Self>) -> Arc<dyn Participant> {
        Arc::clone(self) as Arc<dyn Participant>
    }
}

impl Participant for ChatParticipant {
    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn name(&self) -> &ParticipantName {
        &self.name
    }

    fn new_message_received_from(&self, chat_room: &ChatRoom, message: &ChatMessage) {
        self.sink.write(chat_room, message);
    }
}

impl fmt::Debug for ChatParticipant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatParticipant")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RoomName, sink::MockMessageSink},
        infrastructure::writer::NullMessageWriter,
        usecase::register_chat_handlers,
    };

    fn mediator() -> Arc<Mediator> {
        let mediator = Arc::new(Mediator::new());
        register_chat_handlers(&mediator).unwrap();
        mediator
    }

    fn room(name: &str) -> Arc<ChatRoom> {
        Arc::new(ChatRoom::new(RoomName::new(name.to_string()).unwrap()))
    }

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_join_and_list_participants() {
        // テスト項目: 参加した参加者が参加順で一覧に含まれる
        // given (前提条件):
        let mediator = mediator();
        let room1 = room("Room 1");
        let bob = ChatParticipant::new(mediator.clone(), name("bob"), Arc::new(NullMessageWriter));
        let alice =
            ChatParticipant::new(mediator.clone(), name("alice"), Arc::new(NullMessageWriter));

        // when (操作):
        bob.join(&room1);
        alice.join(&room1);
        let participants = bob.list_participants_of(&room1).unwrap();

        // then (期待する結果):
        let names: Vec<&str> = participants.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
    }

    #[test]
    fn test_sink_receives_room_and_message() {
        // テスト項目: 受信したメッセージはルームと共に MessageSink に渡される
        // given (前提条件):
        let mediator = mediator();
        let room1 = room("Room 1");
        let room_id = *room1.id();
        let mut sink = MockMessageSink::new();
        sink.expect_write()
            .withf(move |r, m| {
                r.id() == &room_id
                    && m.sender_name().as_str() == "bob"
                    && m.content().as_str() == "Hello!"
            })
            .times(1)
            .return_const(());
        let alice = ChatParticipant::new(mediator.clone(), name("alice"), Arc::new(sink));
        let bob = ChatParticipant::new(mediator.clone(), name("bob"), Arc::new(NullMessageWriter));
        alice.join(&room1);

        // when (操作):
        bob.send_message_to(&room1, "Hello!").unwrap();

        // then (期待する結果):
        // 期待値の検証は MockMessageSink の drop 時に行われる
        assert_eq!(room1.message_count(), 1);
    }

    #[test]
    fn test_send_invalid_message_dispatches_nothing() {
        // テスト項目: 不正なメッセージ内容はエラーになり、何も送信されない
        // given (前提条件):
        let mediator = mediator();
        let room1 = room("Room 1");
        let mut sink = MockMessageSink::new();
        sink.expect_write().never();
        let bob = ChatParticipant::new(mediator.clone(), name("bob"), Arc::new(sink));
        bob.join(&room1);

        // when (操作):
        let result = bob.send_message_to(&room1, "");

        // then (期待する結果):
        assert_eq!(result, Err(InvalidArgumentError::MessageContentEmpty));
        assert_eq!(room1.message_count(), 0);
    }

    #[test]
    fn test_queries_fail_without_handlers() {
        // テスト項目: クエリハンドラ未登録の Mediator ではクエリが失敗する
        // given (前提条件):
        let mediator = Arc::new(Mediator::new());
        let room1 = room("Room 1");
        let bob = ChatParticipant::new(mediator, name("bob"), Arc::new(NullMessageWriter));

        // when (操作):
        bob.join(&room1);
        let participants = bob.list_participants_of(&room1);
        let messages = bob.list_messages_of(&room1);

        // then (期待する結果):
        // コマンドは何もせず、クエリはエラー
        assert_eq!(room1.participant_count(), 0);
        assert!(participants.is_err());
        assert!(messages.is_err());
    }
}
