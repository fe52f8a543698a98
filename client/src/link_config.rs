use std::default::Default;

use crate::ResourceHandle;

/// Contains Config properties which will be used by the LinkManager and the
/// built-in hooks
#[derive(Clone, Debug)]
pub struct LinkConfig {
    /// Resource instantiated in place of a prefab that cannot be resolved,
    /// so the entity stays visible in a degraded state
    pub fallback_resource: String,
    /// Resource instantiated once per entity to carry its nameplate text
    pub nameplate_resource: String,
    /// Parent node for every entity's scene node. `None` places them at the
    /// top of the scene.
    pub scene_root: Option<ResourceHandle>,
    /// Whether a change record for an entity with no link yet spawns the link
    /// first. When disabled such records are dropped with a warning.
    pub spawn_on_first_change: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            fallback_resource: "Models/Error".to_string(),
            nameplate_resource: "UI/Nameplate".to_string(),
            scene_root: None,
            spawn_on_first_change: true,
        }
    }
}
