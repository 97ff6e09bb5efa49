//! ログ出力と破棄を行う MessageSink 実装

use tracing::info;

use crate::domain::{ChatMessage, ChatRoom, MessageSink, ParticipantName};

/// 受信したメッセージを `tracing` の info ログとして出力する
#[derive(Debug, Clone)]
pub struct TracingMessageWriter {
    recipient: ParticipantName,
}

impl TracingMessageWriter {
    pub fn new(recipient: ParticipantName) -> Self {
        Self { recipient }
    }
}

impl MessageSink for TracingMessageWriter {
    fn write(&self, chat_room: &ChatRoom, message: &ChatMessage) {
        info!(
            recipient = %self.recipient,
            room = %chat_room.name(),
            from = %message.sender_name(),
            sent_at = %message.timestamp().to_rfc3339(),
            "{}",
            message.content()
        );
    }
}

/// 受信したメッセージを破棄する
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMessageWriter;

impl MessageSink for NullMessageWriter {
    fn write(&self, _chat_room: &ChatRoom, _message: &ChatMessage) {}
}
