use thiserror::Error;

/// Errors that can occur while building a HandlerRegistry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Registry is locked and cannot be modified
    #[error("HandlerRegistry is already locked and cannot be modified. HandlerRegistry.lock() has been called and no further registrations are allowed")]
    AlreadyLocked,

    /// A different handler pair is already registered for the component
    #[error("Conflicting handlers registered for Component: {component_name}. Each Component may only have one change/removal handler pair")]
    ConflictingHandler { component_name: &'static str },
}
