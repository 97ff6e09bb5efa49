//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::InvalidArgumentError;

/// Default maximum length of participant and room names (characters)
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

/// Default maximum length of a chat message (characters)
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 10_000;

/// Participant identifier value object.
///
/// Two participants may share a name; the identifier tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Create a ParticipantId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(Uuid);

impl RoomId {
    /// Create a RoomId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant name value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name; must not be blank
    ///
    /// # Returns
    ///
    /// A Result containing the ParticipantName or an error if validation fails
    pub fn new(name: String) -> Result<Self, InvalidArgumentError> {
        Self::with_limit(name, DEFAULT_MAX_NAME_LENGTH)
    }

    /// Create a new ParticipantName with a custom length limit.
    pub fn with_limit(name: String, max: usize) -> Result<Self, InvalidArgumentError> {
        if name.trim().is_empty() {
            return Err(InvalidArgumentError::ParticipantNameEmpty);
        }
        let actual = name.chars().count();
        if actual > max {
            return Err(InvalidArgumentError::ParticipantNameTooLong { max, actual });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room name value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    /// Create a new RoomName.
    ///
    /// # Returns
    ///
    /// A Result containing the RoomName or an error if validation fails
    pub fn new(name: String) -> Result<Self, InvalidArgumentError> {
        Self::with_limit(name, DEFAULT_MAX_NAME_LENGTH)
    }

    /// Create a new RoomName with a custom length limit.
    pub fn with_limit(name: String, max: usize) -> Result<Self, InvalidArgumentError> {
        if name.trim().is_empty() {
            return Err(InvalidArgumentError::RoomNameEmpty);
        }
        let actual = name.chars().count();
        if actual > max {
            return Err(InvalidArgumentError::RoomNameTooLong { max, actual });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message content value object.
///
/// Represents the content of a chat message with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent.
    ///
    /// # Arguments
    ///
    /// * `content` - The message content string
    ///
    /// # Returns
    ///
    /// A Result containing the MessageContent or an error if validation fails
    pub fn new(content: String) -> Result<Self, InvalidArgumentError> {
        Self::with_limit(content, DEFAULT_MAX_MESSAGE_LENGTH)
    }

    /// Create a new MessageContent with a custom length limit.
    pub fn with_limit(content: String, max: usize) -> Result<Self, InvalidArgumentError> {
        if content.is_empty() {
            return Err(InvalidArgumentError::MessageContentEmpty);
        }
        let actual = content.chars().count();
        if actual > max {
            return Err(InvalidArgumentError::MessageContentTooLong { max, actual });
        }
        Ok(Self(content))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time from the shared monotonic clock.
    pub fn now() -> Self {
        Self(yoriai_shared::time::get_utc_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Format as RFC 3339 (UTC).
    pub fn to_rfc3339(&self) -> String {
        yoriai_shared::time::timestamp_to_utc_rfc3339(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_name_new_success() {
        // テスト項目: 有効な参加者名を作成できる
        // given (前提条件):
        let name = "alice".to_string();

        // when (操作):
        let result = ParticipantName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_participant_name_blank_fails() {
        // テスト項目: 空白のみの参加者名は作成できない
        // when (操作):
        let empty = ParticipantName::new("".to_string());
        let blank = ParticipantName::new("   ".to_string());

        // then (期待する結果):
        assert_eq!(empty, Err(InvalidArgumentError::ParticipantNameEmpty));
        assert_eq!(blank, Err(InvalidArgumentError::ParticipantNameEmpty));
    }

    #[test]
    fn test_participant_name_too_long_fails() {
        // テスト項目: 101 文字以上の参加者名は作成できない
        // given (前提条件):
        let name = "a".repeat(101);

        // when (操作):
        let result = ParticipantName::new(name);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(InvalidArgumentError::ParticipantNameTooLong {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        // テスト項目: 長さはバイト数ではなく文字数で数える
        // given (前提条件):
        let name = "縁".repeat(100);

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_room_name_new_empty_fails() {
        // テスト項目: 空のルーム名は作成できない
        // when (操作):
        let result = RoomName::new("".to_string());

        // then (期待する結果):
        assert_eq!(result, Err(InvalidArgumentError::RoomNameEmpty));
    }

    #[test]
    fn test_room_name_with_limit() {
        // テスト項目: 上限を指定してルーム名を検証できる
        // when (操作):
        let ok = RoomName::with_limit("lobby".to_string(), 5);
        let too_long = RoomName::with_limit("lobby2".to_string(), 5);

        // then (期待する結果):
        assert!(ok.is_ok());
        assert_eq!(
            too_long,
            Err(InvalidArgumentError::RoomNameTooLong { max: 5, actual: 6 })
        );
    }

    #[test]
    fn test_message_content_new_success() {
        // テスト項目: 有効なメッセージ内容を作成できる
        // given (前提条件):
        let content = "Hello, world!".to_string();

        // when (操作):
        let result = MessageContent::new(content);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Hello, world!");
    }

    #[test]
    fn test_message_content_new_empty_fails() {
        // テスト項目: 空のメッセージ内容は作成できない
        // when (操作):
        let result = MessageContent::new("".to_string());

        // then (期待する結果):
        assert_eq!(result, Err(InvalidArgumentError::MessageContentEmpty));
    }

    #[test]
    fn test_message_content_new_too_long_fails() {
        // テスト項目: 10001 文字以上のメッセージ内容は作成できない
        // given (前提条件):
        let content = "a".repeat(10001);

        // when (操作):
        let result = MessageContent::new(content);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(InvalidArgumentError::MessageContentTooLong {
                max: 10000,
                actual: 10001
            })
        );
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }

    #[test]
    fn test_timestamp_now_is_non_decreasing() {
        // テスト項目: Timestamp::now() は連続呼び出しで減少しない
        // when (操作):
        let first = Timestamp::now();
        let second = Timestamp::now();

        // then (期待する結果):
        assert!(first <= second);
    }

    #[test]
    fn test_timestamp_to_rfc3339() {
        // テスト項目: タイムスタンプを RFC 3339 で表示できる
        // given (前提条件):
        let timestamp = Timestamp::new(1_672_498_800_000);

        // then (期待する結果):
        assert_eq!(timestamp.to_rfc3339(), "2022-12-31T15:00:00.000Z");
    }
}
