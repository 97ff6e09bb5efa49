//! Request kinds understood by the mediator.

use std::fmt;

/// Static tag identifying a request shape in the handler registry.
///
/// Each [`Command`] and [`Query`] type reports exactly one tag. Tags are
/// scoped per request family: a command and a query may share a tag without
/// conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestKind(&'static str);

impl RequestKind {
    /// Create a new tag.
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Get the tag string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request describing an intended state change.
///
/// Commands are dispatched to every handler registered for [`Command::KIND`]
/// and return nothing. Dispatching a command nobody handles is a no-op.
pub trait Command: Send + Sync + 'static {
    /// Registry tag for this command type.
    const KIND: RequestKind;
}

/// A request describing an intended state read.
///
/// Queries are dispatched to the single handler registered for
/// [`Query::KIND`], whose result is returned to the caller.
pub trait Query: Send + Sync + 'static {
    /// Value produced by the query handler.
    type Output: 'static;

    /// Registry tag for this query type.
    const KIND: RequestKind;
}

/// Selects the command path of [`crate::Mediator::send`] and
/// [`crate::Mediator::register`].
#[derive(Debug, Clone, Copy)]
pub struct CommandMarker;

/// Selects the query path of [`crate::Mediator::send`] and
/// [`crate::Mediator::register`].
#[derive(Debug, Clone, Copy)]
pub struct QueryMarker;
