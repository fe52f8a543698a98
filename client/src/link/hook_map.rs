use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
};

use crate::{hooks::Hook, Presentation};

// Object-safe view of a Hook so hooks of different types share one table
pub(crate) trait ErasedHook: Send + Sync {
    fn release(&mut self, presentation: &mut dyn Presentation);
    fn hook_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<H: Hook> ErasedHook for H {
    fn release(&mut self, presentation: &mut dyn Presentation) {
        Hook::release(self, presentation);
    }

    fn hook_name(&self) -> &'static str {
        type_name::<H>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Type-indexed table of the hooks attached to one entity. Holds at most one
/// hook per hook type.
#[derive(Default)]
pub struct HookMap {
    hooks: HashMap<TypeId, Box<dyn ErasedHook>>,
}

impl HookMap {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Returns the hook of type `H`, attaching a default one if absent.
    ///
    /// Entries are only ever inserted under their own `TypeId`, so the
    /// downcast cannot fail.
    pub fn require<H: Hook>(&mut self) -> &mut H {
        let hook = self
            .hooks
            .entry(TypeId::of::<H>())
            .or_insert_with(|| Box::new(H::default()));
        let Some(hook) = hook.as_any_mut().downcast_mut::<H>() else {
            unreachable!("HookMap entry for {} holds a foreign type", type_name::<H>());
        };
        hook
    }

    pub fn get<H: Hook>(&self) -> Option<&H> {
        self.hooks
            .get(&TypeId::of::<H>())
            .and_then(|hook| hook.as_any().downcast_ref::<H>())
    }

    pub fn get_mut<H: Hook>(&mut self) -> Option<&mut H> {
        self.hooks
            .get_mut(&TypeId::of::<H>())
            .and_then(|hook| hook.as_any_mut().downcast_mut::<H>())
    }

    pub fn contains<H: Hook>(&self) -> bool {
        self.hooks.contains_key(&TypeId::of::<H>())
    }

    /// Detaches the hook of type `H` without releasing its resources
    pub fn remove<H: Hook>(&mut self) -> Option<H> {
        self.hooks
            .remove(&TypeId::of::<H>())
            .and_then(|hook| hook.into_any().downcast::<H>().ok())
            .map(|hook| *hook)
    }

    /// Detaches every hook, releasing the resources each one owns
    pub fn release_all(&mut self, presentation: &mut dyn Presentation) {
        for (_, mut hook) in self.hooks.drain() {
            log::trace!("Releasing {}", hook.hook_name());
            hook.release(presentation);
        }
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.values().map(|hook| hook.hook_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
