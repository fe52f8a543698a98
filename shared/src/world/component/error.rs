use thiserror::Error;

/// Errors that can occur when handling type-erased component records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// A record was viewed as a different component type than it holds
    #[error("Component kind mismatch: expected `{expected}` but record is `{found}`")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
