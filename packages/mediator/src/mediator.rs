//! The mediator façade over the handler registry.

use tracing::{debug, debug_span, trace};

use crate::{
    error::{HandlerNotFoundError, RegistrationError},
    handler::{CommandHandler, QueryHandler},
    message::{Command, CommandMarker, Query, QueryMarker},
    registry::HandlerRegistry,
};

/// Routes commands and queries to their registered handlers.
///
/// Dispatch is synchronous. `send` returns only after every handler (and
/// every request those handlers dispatched in turn) has finished. The
/// mediator holds no domain state of its own.
#[derive(Debug, Default)]
pub struct Mediator {
    registry: HandlerRegistry,
}

impl Mediator {
    /// Create a mediator with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying handler registry.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Register a command or query handler.
    ///
    /// The registration path is picked from the capability the handler
    /// implements ([`CommandHandler`] or [`QueryHandler`]).
    ///
    /// # Errors
    ///
    /// See [`HandlerRegistry::register_command_handler`] and
    /// [`HandlerRegistry::register_query_handler`].
    pub fn register<M, H>(&self, handler: H) -> Result<(), RegistrationError>
    where
        H: IntoRegistration<M>,
    {
        handler.register_into(&self.registry)
    }

    /// Register a command handler.
    ///
    /// # Errors
    ///
    /// See [`HandlerRegistry::register_command_handler`].
    pub fn register_command_handler<H: CommandHandler>(
        &self,
        handler: H,
    ) -> Result<(), RegistrationError> {
        self.registry.register_command_handler(handler)
    }

    /// Register a query handler.
    ///
    /// # Errors
    ///
    /// See [`HandlerRegistry::register_query_handler`].
    pub fn register_query_handler<H: QueryHandler>(
        &self,
        handler: H,
    ) -> Result<(), RegistrationError> {
        self.registry.register_query_handler(handler)
    }

    /// Dispatch a command or a query.
    ///
    /// Commands return `()`. Queries return
    /// `Result<Q::Output, HandlerNotFoundError>`.
    pub fn send<M, R>(&self, request: R) -> <R as Request<M>>::Response
    where
        R: Request<M>,
    {
        request.dispatch(self)
    }

    /// Dispatch a command to every handler registered for it, in
    /// registration order.
    ///
    /// A command with no handlers is ignored.
    pub fn send_command<C: Command>(&self, command: C) {
        let kind = C::KIND;
        let span = debug_span!("send_command", %kind);
        let _entered = span.enter();

        // Snapshot taken before invoking anything: handlers registered during
        // this dispatch only see later commands.
        let handlers = self.registry.find_command_handlers::<C>();
        if handlers.is_empty() {
            debug!("no command handlers registered, ignoring");
            return;
        }

        debug!(handlers = handlers.len(), "dispatching command");
        for (index, handler) in handlers.iter().enumerate() {
            trace!(index, "invoking command handler");
            handler.handle(&command, self);
        }
    }

    /// Dispatch a query to its handler and return the handler's result.
    ///
    /// # Errors
    ///
    /// Returns `HandlerNotFoundError` if no handler is registered for `Q`.
    pub fn send_query<Q: Query>(&self, query: Q) -> Result<Q::Output, HandlerNotFoundError> {
        let kind = Q::KIND;
        let span = debug_span!("send_query", %kind);
        let _entered = span.enter();

        let handler = self.registry.find_query_handler::<Q>()?;
        trace!("invoking query handler");
        Ok(handler.handle(&query, self))
    }
}

/// A value the mediator can dispatch.
///
/// Implemented for every [`Command`] (marker [`CommandMarker`]) and every
/// [`Query`] (marker [`QueryMarker`]); the marker lets [`Mediator::send`]
/// accept both.
pub trait Request<M> {
    /// What `send` returns for this request.
    type Response;

    /// Dispatch through `mediator`.
    fn dispatch(self, mediator: &Mediator) -> Self::Response;
}

impl<C: Command> Request<CommandMarker> for C {
    type Response = ();

    fn dispatch(self, mediator: &Mediator) {
        mediator.send_command(self);
    }
}

impl<Q: Query> Request<QueryMarker> for Q {
    type Response = Result<Q::Output, HandlerNotFoundError>;

    fn dispatch(self, mediator: &Mediator) -> Self::Response {
        mediator.send_query(self)
    }
}

/// A handler the mediator can register.
///
/// Implemented for every [`CommandHandler`] and every [`QueryHandler`]; the
/// marker lets [`Mediator::register`] accept both.
pub trait IntoRegistration<M> {
    /// Add this handler to `registry`.
    ///
    /// # Errors
    ///
    /// Propagates the registry's [`RegistrationError`].
    fn register_into(self, registry: &HandlerRegistry) -> Result<(), RegistrationError>;
}

impl<H: CommandHandler> IntoRegistration<CommandMarker> for H {
    fn register_into(self, registry: &HandlerRegistry) -> Result<(), RegistrationError> {
        registry.register_command_handler(self)
    }
}

impl<H: QueryHandler> IntoRegistration<QueryMarker> for H {
    fn register_into(self, registry: &HandlerRegistry) -> Result<(), RegistrationError> {
        registry.register_query_handler(self)
    }
}
