use log::debug;

use exlink_shared::EntityId;

use crate::{hooks::Hook, link::HookMap, Presentation, ResourceHandle};

/// The entity and scene node a hook is being applied for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTarget {
    pub entity: EntityId,
    pub node: Option<ResourceHandle>,
}

/// Local presence of one networked entity: its scene node and the hooks
/// mirroring the components it currently has.
pub struct EntityLink {
    entity: EntityId,
    node: Option<ResourceHandle>,
    hooks: HookMap,
    destroyed: bool,
}

impl EntityLink {
    pub fn new(entity: EntityId, node: ResourceHandle) -> Self {
        Self {
            entity,
            node: Some(node),
            hooks: HookMap::new(),
            destroyed: false,
        }
    }

    /// A link without a scene node. Hooks attached to it parent their
    /// resources at the top of the scene.
    pub fn detached(entity: EntityId) -> Self {
        Self {
            entity,
            node: None,
            hooks: HookMap::new(),
            destroyed: false,
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn node(&self) -> Option<ResourceHandle> {
        self.node
    }

    pub fn target(&self) -> LinkTarget {
        LinkTarget {
            entity: self.entity,
            node: self.node,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns the hook of type `H`, attaching a default one if absent
    pub fn require_hook<H: Hook>(&mut self) -> &mut H {
        if !self.hooks.contains::<H>() {
            debug!(
                "{}: attaching {}",
                self.entity,
                std::any::type_name::<H>()
            );
        }
        self.hooks.require::<H>()
    }

    pub fn get_hook<H: Hook>(&self) -> Option<&H> {
        self.hooks.get::<H>()
    }

    pub fn get_hook_mut<H: Hook>(&mut self) -> Option<&mut H> {
        self.hooks.get_mut::<H>()
    }

    pub fn has_hook<H: Hook>(&self) -> bool {
        self.hooks.contains::<H>()
    }

    /// Detaches the hook of type `H`. The caller becomes responsible for
    /// releasing its resources.
    pub fn remove_hook<H: Hook>(&mut self) -> Option<H> {
        self.hooks.remove::<H>()
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.hook_names()
    }

    /// Releases every hook and destroys the scene node. Returns false if the
    /// link was already destroyed.
    pub fn destroy(&mut self, presentation: &mut dyn Presentation) -> bool {
        if self.destroyed {
            return false;
        }

        self.hooks.release_all(presentation);
        if let Some(node) = self.node.take() {
            presentation.destroy(node);
        }
        self.destroyed = true;

        debug!("{}: link destroyed", self.entity);
        true
    }
}
