use std::{
    any::{Any, TypeId},
    collections::HashMap,
    ptr,
};

use log::{trace, warn};

use exlink_shared::{Component, ComponentError, ComponentKind};

use crate::{
    hooks::{change_hook, remove_hook, DisplayHook, Hook, HookContext, NameplateHook, TypedHook},
    registry::RegistryError,
    EntityLink,
};

/// Handler invoked when a record for `C` arrives for an entity
pub type ChangeFn<C> = fn(&C, &mut EntityLink, &mut HookContext<'_>);
/// Handler invoked when a record for `C` is retracted from an entity
pub type RemoveFn<C> = fn(&C, &mut EntityLink, &mut HookContext<'_>);

/// What a dispatch did with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A registered handler ran
    Applied,
    /// No handler is registered for the record's kind
    Unhandled,
    /// The target link is gone, nothing ran
    MissingOwner,
}

trait ComponentHandler: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    /// True when `other` was built from the same hook type or names the same
    /// pair of functions
    fn same_handlers(&self, other: &dyn ComponentHandler) -> bool;
    fn handle_change(
        &self,
        record: &dyn Component,
        link: &mut EntityLink,
        ctx: &mut HookContext<'_>,
    ) -> Result<(), ComponentError>;
    fn handle_removal(
        &self,
        record: &dyn Component,
        link: &mut EntityLink,
        ctx: &mut HookContext<'_>,
    ) -> Result<(), ComponentError>;
}

struct ComponentHandlerImpl<C: Component> {
    hook: Option<TypeId>,
    on_change: ChangeFn<C>,
    on_remove: RemoveFn<C>,
}

impl<C: Component> ComponentHandlerImpl<C> {
    fn new_boxed(
        hook: Option<TypeId>,
        on_change: ChangeFn<C>,
        on_remove: RemoveFn<C>,
    ) -> Box<dyn ComponentHandler> {
        Box::new(Self {
            hook,
            on_change,
            on_remove,
        })
    }
}

impl<C: Component> ComponentHandler for ComponentHandlerImpl<C> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn same_handlers(&self, other: &dyn ComponentHandler) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        match (self.hook, other.hook) {
            (Some(hook), Some(other_hook)) => hook == other_hook,
            (None, None) => {
                ptr::fn_addr_eq(self.on_change, other.on_change)
                    && ptr::fn_addr_eq(self.on_remove, other.on_remove)
            }
            _ => false,
        }
    }

    fn handle_change(
        &self,
        record: &dyn Component,
        link: &mut EntityLink,
        ctx: &mut HookContext<'_>,
    ) -> Result<(), ComponentError> {
        let record = record.downcast_ref::<C>()?;
        (self.on_change)(record, link, ctx);
        Ok(())
    }

    fn handle_removal(
        &self,
        record: &dyn Component,
        link: &mut EntityLink,
        ctx: &mut HookContext<'_>,
    ) -> Result<(), ComponentError> {
        let record = record.downcast_ref::<C>()?;
        (self.on_remove)(record, link, ctx);
        Ok(())
    }
}

/// Routes component records to the change/removal handlers registered for
/// their kind.
///
/// Built once at startup by explicit registrations, then locked. The registry
/// holds no scene state; all side effects happen inside the handlers.
pub struct HandlerRegistry {
    handlers: HashMap<ComponentKind, Box<dyn ComponentHandler>>,
    locked: bool,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            locked: false,
        }
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A locked registry with the built-in Display, Nameplate and Typed hooks
    pub fn with_builtin_hooks() -> Self {
        let mut registry = Self::new();
        registry.add_builtin_hooks();
        registry.lock();
        registry
    }

    pub fn add_builtin_hooks(&mut self) -> &mut Self {
        self.register_hook::<DisplayHook>()
            .register_hook::<NameplateHook>()
            .register_hook::<TypedHook>()
    }

    /// Registers the change/removal pair of hook `H` for `H::Record`.
    ///
    /// # Panics
    ///
    /// Panics if the registry is locked or another handler pair is registered
    /// for the same component. See [`HandlerRegistry::try_register_hook`].
    pub fn register_hook<H: Hook>(&mut self) -> &mut Self {
        if let Err(err) = self.try_register_hook::<H>() {
            panic!("{}", err);
        }
        self
    }

    /// Registers an explicit pair of handler functions for `C`.
    ///
    /// # Panics
    ///
    /// Panics if the registry is locked or another handler pair is registered
    /// for the same component. See [`HandlerRegistry::try_register`].
    pub fn register<C: Component>(
        &mut self,
        on_change: ChangeFn<C>,
        on_remove: RemoveFn<C>,
    ) -> &mut Self {
        if let Err(err) = self.try_register::<C>(on_change, on_remove) {
            panic!("{}", err);
        }
        self
    }

    // Non-panicking registration methods

    pub fn try_register_hook<H: Hook>(&mut self) -> Result<&mut Self, RegistryError> {
        let handler = ComponentHandlerImpl::<H::Record>::new_boxed(
            Some(TypeId::of::<H>()),
            change_hook::<H>,
            remove_hook::<H>,
        );
        self.insert_handler(ComponentKind::of::<H::Record>(), handler)
    }

    /// Registers an explicit pair of handler functions for `C`.
    ///
    /// Re-registering the same pair is a no-op. Functions are compared by
    /// address with [`std::ptr::fn_addr_eq`], so two distinct functions whose
    /// bodies the compiler merged into one may be taken for the same pair.
    /// Give each handler a distinct body, or register a [`Hook`] type instead
    /// when conflict detection must be exact.
    pub fn try_register<C: Component>(
        &mut self,
        on_change: ChangeFn<C>,
        on_remove: RemoveFn<C>,
    ) -> Result<&mut Self, RegistryError> {
        let handler = ComponentHandlerImpl::<C>::new_boxed(None, on_change, on_remove);
        self.insert_handler(ComponentKind::of::<C>(), handler)
    }

    fn insert_handler(
        &mut self,
        kind: ComponentKind,
        handler: Box<dyn ComponentHandler>,
    ) -> Result<&mut Self, RegistryError> {
        if self.locked {
            return Err(RegistryError::AlreadyLocked);
        }

        if let Some(existing) = self.handlers.get(&kind) {
            if existing.same_handlers(handler.as_ref()) {
                trace!("Handlers for {:?} already registered", kind);
                return Ok(self);
            }
            return Err(RegistryError::ConflictingHandler {
                component_name: kind.name(),
            });
        }

        self.handlers.insert(kind, handler);
        Ok(self)
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn has_handler(&self, kind: &ComponentKind) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn has_handler_for<C: Component>(&self) -> bool {
        self.has_handler(&ComponentKind::of::<C>())
    }

    pub fn kinds(&self) -> impl Iterator<Item = &ComponentKind> {
        self.handlers.keys()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the change handler registered for the record's kind
    pub fn dispatch(
        &self,
        record: &dyn Component,
        link: &mut EntityLink,
        ctx: &mut HookContext<'_>,
    ) -> DispatchOutcome {
        let Some(handler) = self.route(record, link) else {
            return self.unrouted(record, link);
        };

        match handler.handle_change(record, link, ctx) {
            Ok(()) => DispatchOutcome::Applied,
            Err(err) => {
                warn!("{}: change dispatch skipped. {}", link.entity(), err);
                DispatchOutcome::Unhandled
            }
        }
    }

    /// Runs the removal handler registered for the record's kind
    pub fn dispatch_removal(
        &self,
        record: &dyn Component,
        link: &mut EntityLink,
        ctx: &mut HookContext<'_>,
    ) -> DispatchOutcome {
        let Some(handler) = self.route(record, link) else {
            return self.unrouted(record, link);
        };

        match handler.handle_removal(record, link, ctx) {
            Ok(()) => DispatchOutcome::Applied,
            Err(err) => {
                warn!("{}: removal dispatch skipped. {}", link.entity(), err);
                DispatchOutcome::Unhandled
            }
        }
    }

    fn route(&self, record: &dyn Component, link: &EntityLink) -> Option<&dyn ComponentHandler> {
        if link.is_destroyed() {
            return None;
        }
        self.handlers.get(&record.kind()).map(|handler| handler.as_ref())
    }

    fn unrouted(&self, record: &dyn Component, link: &EntityLink) -> DispatchOutcome {
        if link.is_destroyed() {
            warn!(
                "{}: dispatch of {} to a destroyed link ignored",
                link.entity(),
                record.name()
            );
            return DispatchOutcome::MissingOwner;
        }
        trace!("No handler for ComponentKind: {:?}", record.kind());
        DispatchOutcome::Unhandled
    }
}
