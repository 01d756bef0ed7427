pub mod errors;
pub mod event_dispatcher;

pub use errors::DispatchError;
pub use event_dispatcher::{DispatchPolicy, EventDispatcher};
