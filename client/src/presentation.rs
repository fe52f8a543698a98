use std::fmt;

use exlink_shared::{Quat, Vec3};
use thiserror::Error;

// ResourceHandle
/// Opaque handle to a scene node or instantiated resource owned by the
/// presentation layer.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    pub fn from_u64(value: u64) -> Self {
        ResourceHandle(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resource#{}", self.0)
    }
}

/// Errors reported by a [`Presentation`] implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// The resource reference could not be resolved to a loadable asset
    #[error("Resource `{resource}` could not be resolved")]
    ResourceNotFound { resource: String },
}

/// Scene-graph / resource-instantiation API that hooks call into.
///
/// Injected by the caller on every dispatch. All calls happen on the
/// presentation thread.
pub trait Presentation {
    /// Creates an empty named node, used as the scene presence of an entity
    fn create_node(&mut self, name: &str, parent: Option<ResourceHandle>) -> ResourceHandle;

    /// Instantiates a resource (prefab, widget, ...) under `parent`
    fn instantiate(
        &mut self,
        resource: &str,
        parent: Option<ResourceHandle>,
    ) -> Result<ResourceHandle, PresentationError>;

    /// Destroys a node or resource along with everything parented to it
    fn destroy(&mut self, handle: ResourceHandle);

    fn set_transform(&mut self, handle: ResourceHandle, position: Vec3, rotation: Quat);

    fn set_text(&mut self, handle: ResourceHandle, text: &str);

    fn set_name(&mut self, handle: ResourceHandle, name: &str);
}
