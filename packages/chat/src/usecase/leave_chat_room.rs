//! UseCase: チャットルームからの退出
//!
//! 参加者の最初のメンバー登録を削除します。
//! 参加していない参加者の退出はエラーにせず何もしません。

use std::sync::Arc;

use tracing::debug;
use yoriai_mediator::{Command, CommandHandler, Mediator, RequestKind};

use crate::domain::{ChatRoom, Participant};

/// 退出コマンド：対象ルームと参加者
#[derive(Debug, Clone)]
pub struct LeaveChatRoomCommand {
    chat_room: Arc<ChatRoom>,
    requester: Arc<dyn Participant>,
}

impl LeaveChatRoomCommand {
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

impl Command for LeaveChatRoomCommand {
    const KIND: RequestKind = RequestKind::new("chat.leave");
}

/// 退出コマンドのハンドラ
#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveChatRoomHandler;

impl CommandHandler for LeaveChatRoomHandler {
    type Command = LeaveChatRoomCommand;

    fn handle(&self, command: &LeaveChatRoomCommand, _mediator: &Mediator) {
        debug!(
            room = %command.chat_room.name(),
            participant = %command.requester.name(),
            "participant left"
        );
        command
            .chat_room
            .remove_participant(command.requester.id());
    }
}
