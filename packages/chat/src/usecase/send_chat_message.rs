//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendChatMessageHandler::handle() メソッド
//! - メッセージの記録と、記録後のメンバー全員への通知
//!
//! ### なぜこのテストが必要か
//! - 記録と通知が一つのディスパッチ内で完結することを保証
//! - 通知対象が記録後のメンバー一覧のスナップショットであることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メンバー全員（送信者を含む）への通知
//! - エッジケース：メンバーがいないルームへの送信（記録のみ）
//! - エッジケース：通知中にメンバーが増えても、そのメッセージは届かない

use std::sync::Arc;

use tracing::debug;
use yoriai_mediator::{Command, CommandHandler, Mediator, RequestKind};

use crate::domain::{ChatMessage, ChatRoom};

/// メッセージ送信コマンド：対象ルームと送信するメッセージ
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    chat_room: Arc<ChatRoom>,
    message: ChatMessage,
}

impl SendChatMessageCommand {
    pub fn new(chat_room: Arc<ChatRoom>, message: ChatMessage) -> Self {
        Self { chat_room, message }
    }

    pub fn chat_room(&self) -> &Arc<ChatRoom> {
        &self.chat_room
    }

    pub fn message(&self) -> &ChatMessage {
        &self.message
    }
}

impl Command for SendChatMessageCommand {
    const KIND: RequestKind = RequestKind::new("chat.send_message");
}

/// メッセージ送信コマンドの標準ハンドラ
///
/// メッセージをルームの履歴に記録し、その時点のメンバー全員に通知する
#[derive(Debug, Default, Clone, Copy)]
pub struct SendChatMessageHandler;

impl CommandHandler for SendChatMessageHandler {
    type Command = SendChatMessageCommand;

    fn handle(&self, command: &SendChatMessageCommand, _mediator: &Mediator) {
        let chat_room = command.chat_room();
        let message = command.message();

        // 1. メッセージを履歴に追加
        chat_room.record_message(message.clone());

        // 2. 記録後のメンバー一覧を一度だけ取得して通知
        let recipients = chat_room.list_participants();
        debug!(
            room = %chat_room.name(),
            from = %message.sender_name(),
            recipients = recipients.len(),
            "broadcasting chat message"
        );
        for participant in recipients {
            participant.new_message_received_from(chat_room, message);
        }
    }
}
