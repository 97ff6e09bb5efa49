//! Runtime configuration for a chat session.

use crate::domain::{DEFAULT_MAX_MESSAGE_LENGTH, DEFAULT_MAX_NAME_LENGTH};

/// Default name of the room moderator reports go to
pub const DEFAULT_MODERATOR_ROOM: &str = "Moderators";

/// Default display name of the moderator
pub const DEFAULT_MODERATOR_NAME: &str = "moderator";

/// Knobs for a chat session. The mediator itself has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Maximum participant and room name length (characters)
    pub max_name_length: usize,
    /// Maximum message length (characters)
    pub max_message_length: usize,
    /// Words the moderator reports; no moderator runs when empty
    pub banned_words: Vec<String>,
    /// Room the moderator reports to
    pub moderator_room: String,
    /// Display name of the moderator
    pub moderator_name: String,
    /// Also log every delivery with `tracing`
    pub log_deliveries: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            banned_words: Vec::new(),
            moderator_room: DEFAULT_MODERATOR_ROOM.to_string(),
            moderator_name: DEFAULT_MODERATOR_NAME.to_string(),
            log_deliveries: false,
        }
    }
}

impl ChatConfig {
    /// Whether a moderator should be installed
    pub fn moderation_enabled(&self) -> bool {
        self.banned_words.iter().any(|word| !word.is_empty())
    }
}
