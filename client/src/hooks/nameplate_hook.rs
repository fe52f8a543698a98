use log::warn;

use exlink_shared::Nameplate;

use crate::{hooks::Hook, link::LinkTarget, HookContext, Presentation, ResourceHandle};

/// Mirrors [`Nameplate`]: owns one text widget per entity, created on first
/// dispatch and retitled on every dispatch after.
#[derive(Default, Debug)]
pub struct NameplateHook {
    plate: Option<ResourceHandle>,
    text: Option<String>,
    unresolved: bool,
}

impl NameplateHook {
    pub fn plate(&self) -> Option<ResourceHandle> {
        self.plate
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Hook for NameplateHook {
    type Record = Nameplate;

    fn apply(&mut self, record: &Nameplate, target: LinkTarget, ctx: &mut HookContext<'_>) {
        // A plate that failed to resolve once is not retried every tick
        if self.plate.is_none() && !self.unresolved {
            let resource = ctx.config.nameplate_resource.as_str();
            match ctx.presentation.instantiate(resource, target.node) {
                Ok(plate) => self.plate = Some(plate),
                Err(err) => {
                    warn!("{}: {}. Nameplate will not be shown", target.entity, err);
                    self.unresolved = true;
                }
            }
        }

        if let Some(plate) = self.plate {
            ctx.presentation.set_text(plate, &record.name);
        }
        self.text = Some(record.name.clone());
    }

    fn release(&mut self, presentation: &mut dyn Presentation) {
        if let Some(plate) = self.plate.take() {
            presentation.destroy(plate);
        }
        self.text = None;
        self.unresolved = false;
    }
}
