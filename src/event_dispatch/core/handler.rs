use super::event::{DomainEvent, EventEnvelope};

/// A single-method capability invoked once per dispatched event.
///
/// Handlers only produce side effects. An `Err` is reported back through the
/// dispatcher according to its [`DispatchPolicy`](crate::event_dispatch::DispatchPolicy).
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    fn handle(&self, event: &EventEnvelope<E>) -> anyhow::Result<()>;

    /// Name used in logs and dispatch errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
