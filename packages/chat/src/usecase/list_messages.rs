//! UseCase: メッセージ履歴の取得
//!
//! 参加前に送信されたメッセージも含め、ルームの履歴全体を返します。

use std::sync::Arc;

use tracing::trace;
use yoriai_mediator::{Mediator, Query, QueryHandler, RequestKind};

use crate::domain::{ChatMessage, ChatRoom, Participant};

/// メッセージ履歴クエリ：対象ルームと要求者
#[derive(Debug, Clone)]
pub struct ListMessagesQuery {
    chat_room: Arc<ChatRoom>,
    requester: Arc<dyn Participant>,
}

impl ListMessagesQuery {
    pub fn new(chat_room: Arc<ChatRoom>, requester: Arc<dyn Participant>) -> Self {
        Self {
            chat_room,
            requester,
        }
    }

    pub fn chat_room(&self) -> &Arc<ChatRoom> {
        &self.chat_room
    }

    pub fn requester(&self) -> &Arc<dyn Participant> {
        &self.requester
    }
}

impl Query for ListMessagesQuery {
    type Output = Vec<ChatMessage>;
    const KIND: RequestKind = RequestKind::new("chat.list_messages");
}

/// メッセージ履歴クエリのハンドラ
#[derive(Debug, Default, Clone, Copy)]
pub struct ListMessagesHandler;

impl QueryHandler for ListMessagesHandler {
    type Query = ListMessagesQuery;

    fn handle(&self, query: &ListMessagesQuery, _mediator: &Mediator) -> Vec<ChatMessage> {
        trace!(
            room = %query.chat_room.name(),
            requester = %query.requester.name(),
            "listing messages"
        );
        query.chat_room.list_messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        MessageContent, ParticipantIdFactory, ParticipantName, RoomName, Timestamp,
        participant::MockParticipant,
    };

    #[test]
    fn test_list_messages_includes_messages_sent_before_joining() {
        // テスト項目: 要求者がメンバーでなくても履歴全体が返される
        // given (前提条件):
        let mediator = Mediator::new();
        mediator.register(ListMessagesHandler).unwrap();
        let chat_room = Arc::new(ChatRoom::new(RoomName::new("Room 1".to_string()).unwrap()));
        let sender = ParticipantIdFactory::generate();
        chat_room.record_message(ChatMessage::with_timestamp(
            sender,
            ParticipantName::new("bob".to_string()).unwrap(),
            MessageContent::new("Hello!".to_string()).unwrap(),
            Timestamp::new(1000),
        ));

        let mut alice = MockParticipant::new();
        alice
            .expect_id()
            .return_const(ParticipantIdFactory::generate());
        alice
            .expect_name()
            .return_const(ParticipantName::new("alice".to_string()).unwrap());

        // when (操作):
        let result = mediator.send(ListMessagesQuery::new(chat_room, Arc::new(alice)));

        // then (期待する結果):
        let messages = result.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender_id(), &sender);
        assert_eq!(messages[0].content().as_str(), "Hello!");
    }
}
