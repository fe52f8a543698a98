use log::{debug, warn};

use exlink_shared::Display;

use crate::{hooks::Hook, link::LinkTarget, HookContext, Presentation, ResourceHandle};

/// Mirrors [`Display`]: owns the instantiated prefab of an entity.
///
/// The prefab is only swapped when its name changes. Position and rotation
/// are pushed on every dispatch.
#[derive(Default, Debug)]
pub struct DisplayHook {
    prefab: Option<String>,
    resource: Option<ResourceHandle>,
    fallback: bool,
}

impl DisplayHook {
    /// Prefab name last requested by a record. When the hook is degraded this
    /// is still the requested name, not the fallback's.
    pub fn prefab(&self) -> Option<&str> {
        self.prefab.as_deref()
    }

    pub fn resource(&self) -> Option<ResourceHandle> {
        self.resource
    }

    /// Whether the requested prefab could not be resolved and the fallback
    /// resource stands in for it
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    fn swap_resource(&mut self, prefab: &str, target: LinkTarget, ctx: &mut HookContext<'_>) {
        if self.fallback && self.resource.is_some() {
            self.replace_fallback(prefab, target, ctx);
            return;
        }

        if let Some(old) = self.resource.take() {
            ctx.presentation.destroy(old);
        }
        self.prefab = Some(prefab.to_string());
        self.fallback = false;

        match ctx.presentation.instantiate(prefab, target.node) {
            Ok(resource) => {
                debug!("{}: instantiated `{}` as {}", target.entity, prefab, resource);
                self.resource = Some(resource);
            }
            Err(err) => {
                let fallback = ctx.config.fallback_resource.as_str();
                warn!(
                    "{}: {}. Substituting fallback `{}`",
                    target.entity, err, fallback
                );
                self.fallback = true;
                match ctx.presentation.instantiate(fallback, target.node) {
                    Ok(resource) => self.resource = Some(resource),
                    Err(err) => warn!(
                        "{}: fallback unavailable ({}). Entity has no visual",
                        target.entity, err
                    ),
                }
            }
        }
    }

    // A live fallback is only destroyed once the new prefab has resolved
    fn replace_fallback(&mut self, prefab: &str, target: LinkTarget, ctx: &mut HookContext<'_>) {
        self.prefab = Some(prefab.to_string());

        match ctx.presentation.instantiate(prefab, target.node) {
            Ok(resource) => {
                debug!("{}: instantiated `{}` as {}", target.entity, prefab, resource);
                if let Some(old) = self.resource.replace(resource) {
                    ctx.presentation.destroy(old);
                }
                self.fallback = false;
            }
            Err(err) => warn!(
                "{}: {}. Keeping fallback `{}`",
                target.entity, err, ctx.config.fallback_resource
            ),
        }
    }
}

impl Hook for DisplayHook {
    type Record = Display;

    fn apply(&mut self, record: &Display, target: LinkTarget, ctx: &mut HookContext<'_>) {
        if self.prefab.as_deref() != Some(record.prefab.as_str()) {
            self.swap_resource(&record.prefab, target, ctx);
        }

        if let Some(resource) = self.resource {
            ctx.presentation
                .set_transform(resource, record.position, record.rotation);
        }
    }

    fn release(&mut self, presentation: &mut dyn Presentation) {
        if let Some(resource) = self.resource.take() {
            presentation.destroy(resource);
        }
        self.prefab = None;
        self.fallback = false;
    }
}
