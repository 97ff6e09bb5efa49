//! 外部出力用 DTO

pub mod report;
pub mod transcript;

pub use report::{QueryResultDto, SessionReportDto};
pub use transcript::{ParticipantTranscriptDto, TranscriptEntryDto};
