//! 複数の MessageSink へ同じ配信を転送する MessageSink 実装

use std::{fmt, sync::Arc};

use crate::domain::{ChatMessage, ChatRoom, MessageSink};

/// 受信したメッセージを登録順にすべての MessageSink へ渡す
pub struct TeeMessageWriter {
    sinks: Vec<Arc<dyn MessageSink>>,
}

impl TeeMessageWriter {
    pub fn new(sinks: Vec<Arc<dyn MessageSink>>) -> Self {
        Self { sinks }
    }
}

impl MessageSink for TeeMessageWriter {
    fn write(&self, chat_room: &ChatRoom, message: &ChatMessage) {
        for sink in &self.sinks {
            sink.write(chat_room, message);
        }
    }
}

impl fmt::Debug for TeeMessageWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeeMessageWriter")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            MessageContent, ParticipantIdFactory, ParticipantName, RoomName, Timestamp,
            sink::MockMessageSink,
        },
        infrastructure::writer::InMemoryTranscript,
    };

    #[test]
    fn test_write_forwards_to_every_sink() {
        // テスト項目: 一件の配信がすべての MessageSink に一度ずつ渡される
        // given (前提条件):
        let room = ChatRoom::new(RoomName::new("Room 1".to_string()).unwrap());
        let message = ChatMessage::with_timestamp(
            ParticipantIdFactory::generate(),
            ParticipantName::new("bob".to_string()).unwrap(),
            MessageContent::new("Hello!".to_string()).unwrap(),
            Timestamp::new(1000),
        );
        let transcript = Arc::new(InMemoryTranscript::new());
        let mut mock = MockMessageSink::new();
        mock.expect_write()
            .withf(|_, m| m.content().as_str() == "Hello!")
            .times(1)
            .return_const(());
        let sinks: Vec<Arc<dyn MessageSink>> = vec![transcript.clone(), Arc::new(mock)];
        let tee = TeeMessageWriter::new(sinks);

        // when (操作):
        tee.write(&room, &message);

        // then (期待する結果):
        assert_eq!(transcript.len(), 1);
    }
}
