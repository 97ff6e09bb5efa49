//! Handler registry keyed by request kind.
//!
//! Handlers are stored type-erased and recovered by downcasting when a
//! request of the matching type is dispatched. Each kind tag is bound to the
//! first concrete request type registered under it, so a lookup never
//! returns a handler for a different type that happens to share the tag.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::{debug, warn};

use crate::{
    error::{HandlerNotFoundError, RegistrationError},
    handler::{CommandHandler, QueryHandler},
    message::{Command, Query, RequestKind},
};

type ErasedHandler = Box<dyn Any + Send + Sync>;

/// Handlers registered under one kind tag.
struct HandlerSlot {
    type_id: TypeId,
    type_name: &'static str,
    handlers: Vec<ErasedHandler>,
}

impl HandlerSlot {
    fn new<R: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<R>(),
            type_name: type_name::<R>(),
            handlers: Vec::new(),
        }
    }

    fn holds<R: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<R>()
    }

    fn ensure_holds<R: 'static>(&self, kind: RequestKind) -> Result<(), RegistrationError> {
        if self.holds::<R>() {
            Ok(())
        } else {
            Err(RegistrationError::KindConflict {
                kind,
                registered: self.type_name,
                requested: type_name::<R>(),
            })
        }
    }
}

/// Type-indexed store of command and query handlers.
///
/// Interior locks are held only while the handler map itself is read or
/// updated, never while a handler runs, so handlers may register further
/// handlers or dispatch nested requests.
#[derive(Default)]
pub struct HandlerRegistry {
    commands: RwLock<HashMap<RequestKind, HandlerSlot>>,
    queries: RwLock<HashMap<RequestKind, HandlerSlot>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for the command type it declares.
    ///
    /// Registrations for the same command accumulate and are dispatched in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::KindConflict` if the command's tag is
    /// already bound to a different command type.
    pub fn register_command_handler<H: CommandHandler>(
        &self,
        handler: H,
    ) -> Result<(), RegistrationError> {
        let kind = <H::Command as Command>::KIND;
        let handler: Arc<dyn CommandHandler<Command = H::Command>> = Arc::new(handler);

        let mut commands = write(&self.commands);
        let slot = commands
            .entry(kind)
            .or_insert_with(HandlerSlot::new::<H::Command>);
        slot.ensure_holds::<H::Command>(kind)?;
        slot.handlers.push(Box::new(handler));

        debug!(
            %kind,
            handler = type_name::<H>(),
            registered = slot.handlers.len(),
            "command handler registered"
        );
        Ok(())
    }

    /// Register the handler for the query type it declares.
    ///
    /// # Errors
    ///
    /// - `RegistrationError::QueryHandlerAlreadyRegistered` if the query
    ///   already has a handler; the existing one is kept
    /// - `RegistrationError::KindConflict` if the query's tag is already
    ///   bound to a different query type
    pub fn register_query_handler<H: QueryHandler>(
        &self,
        handler: H,
    ) -> Result<(), RegistrationError> {
        let kind = <H::Query as Query>::KIND;
        let handler: Arc<dyn QueryHandler<Query = H::Query>> = Arc::new(handler);

        let mut queries = write(&self.queries);
        let slot = queries
            .entry(kind)
            .or_insert_with(HandlerSlot::new::<H::Query>);
        slot.ensure_holds::<H::Query>(kind)?;
        if !slot.handlers.is_empty() {
            return Err(RegistrationError::QueryHandlerAlreadyRegistered {
                kind,
                type_name: slot.type_name,
            });
        }
        slot.handlers.push(Box::new(handler));

        debug!(%kind, handler = type_name::<H>(), "query handler registered");
        Ok(())
    }

    /// Snapshot of the handlers registered for command type `C`, in
    /// registration order. Empty when nothing is registered.
    pub fn find_command_handlers<C: Command>(&self) -> Vec<Arc<dyn CommandHandler<Command = C>>> {
        let commands = read(&self.commands);
        let Some(slot) = commands.get(&C::KIND).filter(|slot| slot.holds::<C>()) else {
            return Vec::new();
        };

        slot.handlers
            .iter()
            .filter_map(|handler| {
                (**handler)
                    .downcast_ref::<Arc<dyn CommandHandler<Command = C>>>()
                    .cloned()
            })
            .collect()
    }

    /// The handler registered for query type `Q`.
    ///
    /// # Errors
    ///
    /// Returns `HandlerNotFoundError` if no handler is registered for `Q`.
    pub fn find_query_handler<Q: Query>(
        &self,
    ) -> Result<Arc<dyn QueryHandler<Query = Q>>, HandlerNotFoundError> {
        let queries = read(&self.queries);
        queries
            .get(&Q::KIND)
            .filter(|slot| slot.holds::<Q>())
            .and_then(|slot| slot.handlers.first())
            .and_then(|handler| {
                (**handler)
                    .downcast_ref::<Arc<dyn QueryHandler<Query = Q>>>()
                    .cloned()
            })
            .ok_or(HandlerNotFoundError {
                kind: Q::KIND,
                type_name: type_name::<Q>(),
            })
    }

    /// Number of handlers registered under a command tag.
    pub fn command_handler_count(&self, kind: RequestKind) -> usize {
        read(&self.commands)
            .get(&kind)
            .map_or(0, |slot| slot.handlers.len())
    }

    /// Whether a handler is registered under a query tag.
    pub fn has_query_handler(&self, kind: RequestKind) -> bool {
        read(&self.queries)
            .get(&kind)
            .is_some_and(|slot| !slot.handlers.is_empty())
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summarise = |map: &HashMap<RequestKind, HandlerSlot>| {
            let mut kinds: Vec<(RequestKind, usize)> = map
                .iter()
                .map(|(kind, slot)| (*kind, slot.handlers.len()))
                .collect();
            kinds.sort();
            kinds
        };

        f.debug_struct("HandlerRegistry")
            .field("commands", &summarise(&read(&self.commands)))
            .field("queries", &summarise(&read(&self.queries)))
            .finish()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| {
        warn!("handler registry lock poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| {
        warn!("handler registry lock poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}
