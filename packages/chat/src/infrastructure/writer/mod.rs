//! MessageSink 実装

pub mod inmemory;
pub mod log;
pub mod tee;

pub use inmemory::{InMemoryTranscript, TranscriptEntry};
pub use log::{NullMessageWriter, TracingMessageWriter};
pub use tee::TeeMessageWriter;
