//! The participant capability rooms and handlers rely on.

use std::fmt;

use super::{
    entity::{ChatMessage, ChatRoom},
    value_object::{ParticipantId, ParticipantName},
};

/// Someone who can be a member of a chat room and be told about messages.
///
/// This is only the membership and notification side of a participant. How
/// a participant issues requests (see `client::ChatParticipant`) is not part
/// of it, so other types (for example a moderator that is also a command
/// handler) can implement it directly.
#[cfg_attr(test, mockall::automock)]
pub trait Participant: Send + Sync {
    /// Identity used for membership bookkeeping.
    fn id(&self) -> &ParticipantId;

    /// Display name.
    fn name(&self) -> &ParticipantName;

    /// Called once per delivered message while the participant is a member
    /// of `chat_room`.
    fn new_message_received_from(&self, chat_room: &ChatRoom, message: &ChatMessage);
}

impl fmt::Debug for dyn Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", self.id())
            .field("name", self.name())
            .finish()
    }
}
