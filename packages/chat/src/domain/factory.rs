//! Domain factories for creating identifiers.

use super::{ParticipantId, RoomId};

/// Factory for generating RoomId instances.
///
/// Keeps identifier generation apart from the RoomId value object itself.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    pub fn generate() -> RoomId {
        RoomId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for generating ParticipantId instances.
pub struct ParticipantIdFactory;

impl ParticipantIdFactory {
    /// Generate a new ParticipantId with a random UUID v4.
    pub fn generate() -> ParticipantId {
        ParticipantId::from_uuid(uuid::Uuid::new_v4())
    }
}
