//! InMemory MessageSink 実装
//!
//! 受信したメッセージを Vec に蓄積します。テストと CLI の最終出力で使用します。

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{ChatMessage, ChatRoom, MessageSink, RoomId, RoomName};

/// 一件の受信記録：どのルームで、どのメッセージを受け取ったか
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub room_id: RoomId,
    pub room_name: RoomName,
    pub message: ChatMessage,
}

/// 受信したメッセージを受信順に保持する MessageSink
#[derive(Debug, Default)]
pub struct InMemoryTranscript {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl InMemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// 受信記録のスナップショット（受信順）
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TranscriptEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageSink for InMemoryTranscript {
    fn write(&self, chat_room: &ChatRoom, message: &ChatMessage) {
        self.lock().push(TranscriptEntry {
            room_id: *chat_room.id(),
            room_name: chat_room.name().clone(),
            message: message.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageContent, ParticipantIdFactory, ParticipantName, Timestamp};

    fn message(text: &str) -> ChatMessage {
        ChatMessage::with_timestamp(
            ParticipantIdFactory::generate(),
            ParticipantName::new("bob".to_string()).unwrap(),
            MessageContent::new(text.to_string()).unwrap(),
            Timestamp::new(1000),
        )
    }

    #[test]
    fn test_write_records_entries_in_order() {
        // テスト項目: 受信したメッセージがルーム情報と共に受信順で記録される
        // given (前提条件):
        let transcript = InMemoryTranscript::new();
        let room1 = ChatRoom::new(RoomName::new("Room 1".to_string()).unwrap());
        let room2 = ChatRoom::new(RoomName::new("Room 2".to_string()).unwrap());

        // when (操作):
        transcript.write(&room1, &message("first"));
        transcript.write(&room2, &message("second"));

        // then (期待する結果):
        let entries = transcript.entries();
        assert_eq!(transcript.len(), 2);
        assert_eq!(entries[0].room_id, *room1.id());
        assert_eq!(entries[0].message.content().as_str(), "first");
        assert_eq!(entries[1].room_name.as_str(), "Room 2");
        assert_eq!(entries[1].message.content().as_str(), "second");
    }

    #[test]
    fn test_new_transcript_is_empty() {
        // テスト項目: 作成直後は空
        let transcript = InMemoryTranscript::new();
        assert!(transcript.is_empty());
        assert!(transcript.entries().is_empty());
    }
}
