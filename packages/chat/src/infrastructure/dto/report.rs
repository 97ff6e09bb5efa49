//! Session report DTOs for the script runner.

use serde::{Deserialize, Serialize};

use super::transcript::{ParticipantTranscriptDto, TranscriptEntryDto};

/// Answer to one query step of a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryResultDto {
    Participants {
        line: usize,
        requester: String,
        room: String,
        participants: Vec<String>,
    },
    Messages {
        line: usize,
        requester: String,
        room: String,
        messages: Vec<TranscriptEntryDto>,
    },
}

/// Output of a whole session: query answers in script order, then each
/// participant's received messages in first-mention order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReportDto {
    pub queries: Vec<QueryResultDto>,
    pub transcripts: Vec<ParticipantTranscriptDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_result_is_tagged() {
        // テスト項目: クエリ結果は種別タグ付きの JSON になる
        // given (前提条件):
        let result = QueryResultDto::Participants {
            line: 3,
            requester: "bob".to_string(),
            room: "Room 1".to_string(),
            participants: vec!["bob".to_string(), "alice".to_string()],
        };

        // when (操作):
        let json = serde_json::to_value(&result).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "query": "participants",
                "line": 3,
                "requester": "bob",
                "room": "Room 1",
                "participants": ["bob", "alice"],
            })
        );
    }
}
