//! Transcript output DTOs for the script runner.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ChatMessage, RoomName},
    infrastructure::writer::TranscriptEntry,
};

/// One delivered message as written to JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntryDto {
    pub room: String,
    pub from: String,
    pub content: String,
    pub sent_at: String, // RFC 3339
}

impl TranscriptEntryDto {
    pub fn new(room: &RoomName, message: &ChatMessage) -> Self {
        Self {
            room: room.to_string(),
            from: message.sender_name().to_string(),
            content: message.content().to_string(),
            sent_at: message.timestamp().to_rfc3339(),
        }
    }
}

impl From<&TranscriptEntry> for TranscriptEntryDto {
    fn from(entry: &TranscriptEntry) -> Self {
        Self::new(&entry.room_name, &entry.message)
    }
}

/// Everything one participant received during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTranscriptDto {
    pub participant: String,
    pub received: Vec<TranscriptEntryDto>,
}
