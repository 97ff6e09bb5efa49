//! UseCase: 参加者一覧の取得

use std::sync::Arc;

use tracing::trace;
use yoriai_mediator::{Mediator, Query, QueryHandler, RequestKind};

use crate::domain::{ChatRoom, Participant};

/// 参加者一覧クエリ：対象ルームと要求者
#[derive(Debug, Clone)]
pub struct ListParticipantsQuery {
    chat_room: Arc<ChatRoom>,
    requester: Arc<dyn Participant>,
}

impl ListParticipantsQuery {
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

impl Query for ListParticipantsQuery {
    type Output = Vec<Arc<dyn Participant>>;
    const KIND: RequestKind = RequestKind::new("chat.list_participants");
}

/// 参加者一覧クエリのハンドラ（参加順のスナップショットを返す）
#[derive(Debug, Default, Clone, Copy)]
pub struct ListParticipantsHandler;

impl QueryHandler for ListParticipantsHandler {
    type Query = ListParticipantsQuery;

    fn handle(
        &self,
        query: &ListParticipantsQuery,
        _mediator: &Mediator,
    ) -> Vec<Arc<dyn Participant>> {
        trace!(
            room = %query.chat_room.name(),
            requester = %query.requester.name(),
            "listing participants"
        );
        query.chat_room.list_participants()
    }
}
