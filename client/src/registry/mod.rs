mod error;
mod handler_registry;

pub use error::RegistryError;
pub use handler_registry::{ChangeFn, DispatchOutcome, HandlerRegistry, RemoveFn};
