//! Mediator error definitions.

use thiserror::Error;

use crate::message::RequestKind;

/// A query was dispatched but no handler is registered for its kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No handler found for query '{type_name}' (kind: {kind})")]
pub struct HandlerNotFoundError {
    /// Tag the query reported
    pub kind: RequestKind,
    /// Rust type name of the query, for diagnostics
    pub type_name: &'static str,
}

/// Errors raised while registering handlers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Queries resolve to exactly one handler
    #[error("A handler is already registered for query '{type_name}' (kind: {kind})")]
    QueryHandlerAlreadyRegistered {
        kind: RequestKind,
        type_name: &'static str,
    },

    /// Two request types reported the same tag
    #[error("Request kind '{kind}' is bound to '{registered}', cannot register a handler for '{requested}'")]
    KindConflict {
        kind: RequestKind,
        registered: &'static str,
        requested: &'static str,
    },
}
