//! Handler traits.
//!
//! A handler is bound to exactly one request type through its associated
//! type. Handlers get the dispatching [`Mediator`] so they can issue nested
//! requests without holding a handle to it.

use std::sync::Arc;

use crate::{
    mediator::Mediator,
    message::{Command, Query},
};

/// Reacts to one command type.
pub trait CommandHandler: Send + Sync + 'static {
    /// Command this handler is registered for.
    type Command: Command;

    /// Handle a dispatched command.
    fn handle(&self, command: &Self::Command, mediator: &Mediator);
}

/// Answers one query type.
pub trait QueryHandler: Send + Sync + 'static {
    /// Query this handler is registered for.
    type Query: Query;

    /// Handle a dispatched query and produce its result.
    fn handle(&self, query: &Self::Query, mediator: &Mediator) -> <Self::Query as Query>::Output;
}

impl<H: CommandHandler + ?Sized> CommandHandler for Arc<H> {
    type Command = H::Command;

    fn handle(&self, command: &Self::Command, mediator: &Mediator) {
        (**self).handle(command, mediator);
    }
}

impl<H: QueryHandler + ?Sized> QueryHandler for Arc<H> {
    type Query = H::Query;

    fn handle(&self, query: &Self::Query, mediator: &Mediator) -> <Self::Query as Query>::Output {
        (**self).handle(query, mediator)
    }
}
