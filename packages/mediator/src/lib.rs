//! In-process command/query mediator.
//!
//! Requests come in two kinds:
//! - [`Command`] = intent to change state, handled by zero or more handlers
//! - [`Query`] = intent to read state, handled by exactly one handler
//!
//! Every request type reports a static [`RequestKind`] tag. The
//! [`HandlerRegistry`] maps tags to the handlers registered for them, and the
//! [`Mediator`] façade resolves and invokes those handlers synchronously.
//!
//! ```text
//! caller ── send(cmd) ──► Mediator ──► registry[cmd.KIND] ──► handler 1
//!                                                      ├────► handler 2
//!                                                      └────► ...
//! caller ◄─ Output ────── Mediator ◄── registry[query.KIND] ─► single handler
//! ```
//!
//! Handlers receive the dispatching [`Mediator`] and may `send` nested
//! requests. A nested dispatch runs to completion before the outer handler
//! resumes.
//!
//! ## Example
//!
//! ```
//! use yoriai_mediator::{Command, CommandHandler, Mediator, RequestKind};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! struct Bump;
//! impl Command for Bump {
//!     const KIND: RequestKind = RequestKind::new("counter.bump");
//! }
//!
//! #[derive(Default)]
//! struct Counter(AtomicUsize);
//! impl CommandHandler for Counter {
//!     type Command = Bump;
//!     fn handle(&self, _command: &Bump, _mediator: &Mediator) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let mediator = Mediator::new();
//! let counter = std::sync::Arc::new(Counter::default());
//! mediator.register(counter.clone()).unwrap();
//! mediator.send(Bump);
//! assert_eq!(counter.0.load(Ordering::Relaxed), 1);
//! ```

mod error;
mod handler;
mod mediator;
mod message;
mod registry;

pub use error::{HandlerNotFoundError, RegistrationError};
pub use handler::{CommandHandler, QueryHandler};
pub use mediator::{IntoRegistration, Mediator, Request};
pub use message::{Command, CommandMarker, Query, QueryMarker, RequestKind};
pub use registry::HandlerRegistry;
