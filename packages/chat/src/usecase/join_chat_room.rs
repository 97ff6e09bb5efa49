//! UseCase: チャットルームへの参加
//!
//! 参加者をルームのメンバー一覧の末尾に追加します。
//! 重複参加のチェックは行いません（同じ参加者が二度参加すると二件になる）。

use std::sync::Arc;

use tracing::debug;
use yoriai_mediator::{Command, CommandHandler, Mediator, RequestKind};

use crate::domain::{ChatRoom, Participant};

/// 参加コマンド：対象ルームと参加者
#[derive(Debug, Clone)]
pub struct JoinChatRoomCommand {
    chat_room: Arc<ChatRoom>,
    requester: Arc<dyn Participant>,
}

impl JoinChatRoomCommand {
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

impl Command for JoinChatRoomCommand {
    const KIND: RequestKind = RequestKind::new("chat.join");
}

/// 参加コマンドのハンドラ
#[derive(Debug, Default, Clone, Copy)]
pub struct JoinChatRoomHandler;

impl CommandHandler for JoinChatRoomHandler {
    type Command = JoinChatRoomCommand;

    fn handle(&self, command: &JoinChatRoomCommand, _mediator: &Mediator) {
        debug!(
            room = %command.chat_room.name(),
            participant = %command.requester.name(),
            "participant joined"
        );
        command
            .chat_room
            .add_participant(Arc::clone(&command.requester));
    }
}
