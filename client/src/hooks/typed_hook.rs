use exlink_shared::Typed;

use crate::{hooks::Hook, link::LinkTarget, HookContext, Presentation};

/// Mirrors [`Typed`]: tags the entity's scene node with its gameplay type.
/// Owns no resource.
#[derive(Default, Debug)]
pub struct TypedHook {
    type_name: Option<String>,
}

impl TypedHook {
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

impl Hook for TypedHook {
    type Record = Typed;

    fn apply(&mut self, record: &Typed, target: LinkTarget, ctx: &mut HookContext<'_>) {
        if self.type_name.as_deref() == Some(record.type_name.as_str()) {
            return;
        }

        if let Some(node) = target.node {
            let name = format!("{} ({})", record.type_name, target.entity);
            ctx.presentation.set_name(node, &name);
        }
        self.type_name = Some(record.type_name.clone());
    }

    fn release(&mut self, _presentation: &mut dyn Presentation) {
        self.type_name = None;
    }
}
