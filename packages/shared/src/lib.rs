//! Shared utilities for the Yoriai workspace.
//!
//! Logging setup and the clock used to stamp chat messages live here so the
//! mediator, the chat domain and the binary agree on both.

pub mod logger;
pub mod time;
