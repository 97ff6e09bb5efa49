//! Error type for the chat session surface.

use std::{io, path::PathBuf};

use thiserror::Error;
use yoriai_mediator::{HandlerNotFoundError, RegistrationError};

use crate::{domain::InvalidArgumentError, ui::script::ScriptError};

/// Anything that can stop a chat session.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// A script step carried an invalid name or message.
    #[error("line {line}: {source}")]
    InvalidStep {
        line: usize,
        #[source]
        source: InvalidArgumentError,
    },

    #[error(transparent)]
    HandlerNotFound(#[from] HandlerNotFoundError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("failed to read script {}: {source}", path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
