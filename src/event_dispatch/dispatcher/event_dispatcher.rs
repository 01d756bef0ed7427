use std::collections::HashMap;
use std::sync::Arc;

use crate::event_dispatch::core::{DomainEvent, EventEnvelope, EventHandler};
use super::errors::DispatchError;

// ============================================================================
// Event Dispatcher - Synchronous Observer Registry
// ============================================================================
//
// Responsibilities:
// 1. Keep an ordered handler list per event kind
// 2. Fan an event out to every handler registered for its kind
// 3. Report handler failures according to the dispatch policy
//
// No queueing, retries or backpressure: notify runs every handler inline on
// the caller's thread and returns when the last one has finished.
//
// ============================================================================

/// What `notify` does when a handler returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Stop at the first failing handler; later handlers are not invoked.
    #[default]
    FailFast,
    /// Invoke every handler, then report all failures together.
    CollectErrors,
}

pub struct EventDispatcher<E: DomainEvent> {
    handlers: HashMap<E::Kind, Vec<Arc<dyn EventHandler<E>>>>,
    policy: DispatchPolicy,
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self::with_policy(DispatchPolicy::default())
    }

    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self {
            handlers: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// Append a handler for `kind`. Registering the same handler twice makes
    /// it run twice per event.
    pub fn register(&mut self, kind: E::Kind, handler: Arc<dyn EventHandler<E>>) {
        tracing::debug!(kind = ?kind, handler = handler.name(), "Registering event handler");
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Remove the first registration of `handler` (by instance identity) for
    /// `kind`. Does nothing if it is not registered.
    pub fn unregister<H>(&mut self, kind: E::Kind, handler: &Arc<H>)
    where
        H: EventHandler<E> + ?Sized,
    {
        let Some(list) = self.handlers.get_mut(&kind) else {
            return;
        };

        if let Some(position) = list.iter().position(|registered| same_instance(registered, handler)) {
            let removed = list.remove(position);
            tracing::debug!(kind = ?kind, handler = removed.name(), "Unregistered event handler");
        }

        if list.is_empty() {
            self.handlers.remove(&kind);
        }
    }

    pub fn unregister_all(&mut self) {
        self.handlers.clear();
        tracing::debug!("Cleared all event handlers");
    }

    /// Handlers registered for `kind`, in registration order.
    pub fn handlers_for(&self, kind: E::Kind) -> &[Arc<dyn EventHandler<E>>] {
        self.handlers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_handler<H>(&self, kind: E::Kind, handler: &Arc<H>) -> bool
    where
        H: EventHandler<E> + ?Sized,
    {
        self.handlers_for(kind)
            .iter()
            .any(|registered| same_instance(registered, handler))
    }

    /// Invoke every handler registered for the event's kind, in registration
    /// order.
    pub fn notify(&self, event: &EventEnvelope<E>) -> Result<(), DispatchError> {
        let kind = event.kind();
        let handlers = self.handlers_for(kind);

        if handlers.is_empty() {
            tracing::debug!(kind = ?kind, event_id = %event.event_id, "No handlers registered for event");
            return Ok(());
        }

        let mut failures = Vec::new();

        for handler in handlers {
            let Err(cause) = handler.handle(event) else {
                continue;
            };

            tracing::warn!(
                kind = ?kind,
                event_id = %event.event_id,
                handler = handler.name(),
                error = %cause,
                "Event handler failed"
            );

            let failure = DispatchError::HandlerFailed {
                kind: format!("{:?}", kind),
                handler: handler.name(),
                cause,
            };

            match self.policy {
                DispatchPolicy::FailFast => return Err(failure),
                DispatchPolicy::CollectErrors => failures.push(failure),
            }
        }

        tracing::debug!(
            kind = ?kind,
            event_id = %event.event_id,
            handler_count = handlers.len(),
            failed = failures.len(),
            "Dispatched event"
        );

        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(DispatchError::Multiple {
                kind: format!("{:?}", kind),
                failures,
            }),
        }
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity comparison on the allocation only; vtable pointers of the same
/// type may differ between codegen units.
fn same_instance<A, B>(a: &Arc<A>, b: &Arc<B>) -> bool
where
    A: ?Sized,
    B: ?Sized,
{
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

// ============================================================================
// Unit Tests
// ============================================================================
