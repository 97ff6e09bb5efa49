//! Message-notification sink.

use super::entity::{ChatMessage, ChatRoom};

/// Receives the messages delivered to one participant.
///
/// Called synchronously while a message is broadcast; implementations
/// should return promptly.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSink: Send + Sync {
    /// Record or forward one delivery.
    fn write(&self, chat_room: &ChatRoom, message: &ChatMessage);
}
