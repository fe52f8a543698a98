use log::debug;

use exlink_shared::Component;

use crate::{link::LinkTarget, EntityLink, LinkConfig, Presentation};

/// Collaborators a hook may use while applying a record
pub struct HookContext<'a> {
    pub presentation: &'a mut dyn Presentation,
    pub config: &'a LinkConfig,
}

impl<'a> HookContext<'a> {
    pub fn new(presentation: &'a mut dyn Presentation, config: &'a LinkConfig) -> Self {
        Self {
            presentation,
            config,
        }
    }
}

/// Per-entity mirror of one component type.
///
/// A hook is created zero-initialized the first time its record is
/// dispatched to an entity, re-applied on every later dispatch, and released
/// when the component is removed or the entity's link is destroyed.
///
/// `apply` must keep per-dispatch work cheap: resources are only rebuilt when
/// the fields identifying them change.
pub trait Hook: Default + Send + Sync + 'static {
    type Record: Component;

    fn apply(&mut self, record: &Self::Record, target: LinkTarget, ctx: &mut HookContext<'_>);

    /// Destroys every resource the hook owns
    fn release(&mut self, presentation: &mut dyn Presentation);
}

/// Change handler registered for a hook type: attaches the hook if absent,
/// then applies the record to it
pub fn change_hook<H: Hook>(record: &H::Record, link: &mut EntityLink, ctx: &mut HookContext<'_>) {
    let target = link.target();
    link.require_hook::<H>().apply(record, target, ctx);
}

/// Removal handler registered for a hook type: detaches the hook and
/// releases its resources. A hook that is already gone is left alone.
pub fn remove_hook<H: Hook>(_record: &H::Record, link: &mut EntityLink, ctx: &mut HookContext<'_>) {
    match link.remove_hook::<H>() {
        Some(mut hook) => {
            hook.release(ctx.presentation);
            debug!("{}: detached {}", link.entity(), std::any::type_name::<H>());
        }
        None => {
            debug!(
                "{}: no {} to remove",
                link.entity(),
                std::any::type_name::<H>()
            );
        }
    }
}
