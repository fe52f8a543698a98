use std::collections::HashMap;

use log::{debug, warn};

use exlink_shared::{Component, EntityId};

use crate::{
    DispatchOutcome, EntityLink, HandlerRegistry, HookContext, LinkConfig, LinkError,
    Presentation, SyncEvent, SyncEvents,
};

/// Table of the entities currently present locally, each with its
/// [`EntityLink`]. Routes incoming records through a locked
/// [`HandlerRegistry`].
pub struct LinkManager {
    registry: HandlerRegistry,
    config: LinkConfig,
    links: HashMap<EntityId, EntityLink>,
}

impl LinkManager {
    /// A manager using the built-in Display, Nameplate and Typed hooks
    pub fn new(config: LinkConfig) -> Self {
        Self::with_registry(HandlerRegistry::with_builtin_hooks(), config)
    }

    /// A manager using a custom registry. The registry is locked if it is
    /// not already.
    pub fn with_registry(mut registry: HandlerRegistry, config: LinkConfig) -> Self {
        registry.lock();
        Self {
            registry,
            config,
            links: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    // Links

    pub fn contains(&self, entity: &EntityId) -> bool {
        self.links.contains_key(entity)
    }

    pub fn link(&self, entity: &EntityId) -> Option<&EntityLink> {
        self.links.get(entity)
    }

    pub fn link_mut(&mut self, entity: &EntityId) -> Option<&mut EntityLink> {
        self.links.get_mut(entity)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityId> {
        self.links.keys()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Creates the scene node and link for a newly observed entity. Returns
    /// false if the entity is already linked.
    pub fn spawn_link(&mut self, entity: EntityId, presentation: &mut dyn Presentation) -> bool {
        self.try_spawn_link(entity, presentation).is_ok()
    }

    /// Destroys the link of an entity along with its hooks and scene node.
    /// Returns false if the entity is not linked.
    pub fn despawn_link(&mut self, entity: EntityId, presentation: &mut dyn Presentation) -> bool {
        match self.try_despawn_link(entity, presentation) {
            Ok(()) => true,
            Err(err) => {
                warn!("Despawn ignored. {}", err);
                false
            }
        }
    }

    pub fn try_spawn_link(
        &mut self,
        entity: EntityId,
        presentation: &mut dyn Presentation,
    ) -> Result<(), LinkError> {
        if self.links.contains_key(&entity) {
            return Err(LinkError::EntityAlreadyLinked { entity });
        }

        let node = presentation.create_node(&entity.to_string(), self.config.scene_root);
        self.links.insert(entity, EntityLink::new(entity, node));
        debug!("{}: linked to {}", entity, node);
        Ok(())
    }

    pub fn try_despawn_link(
        &mut self,
        entity: EntityId,
        presentation: &mut dyn Presentation,
    ) -> Result<(), LinkError> {
        let Some(mut link) = self.links.remove(&entity) else {
            return Err(LinkError::EntityNotLinked { entity });
        };

        if !link.destroy(presentation) {
            return Err(LinkError::LinkDestroyed { entity });
        }
        Ok(())
    }

    /// Despawns every link
    pub fn clear(&mut self, presentation: &mut dyn Presentation) {
        for (_, mut link) in self.links.drain() {
            link.destroy(presentation);
        }
    }

    // Dispatch

    /// Delivers a changed record to an entity, linking the entity first if
    /// it has not been observed yet and the config allows it
    pub fn apply_change(
        &mut self,
        entity: EntityId,
        record: &dyn Component,
        presentation: &mut dyn Presentation,
    ) -> DispatchOutcome {
        if !self.links.contains_key(&entity) {
            if !self.config.spawn_on_first_change {
                warn!(
                    "{}: {} arrived before the entity was spawned, dropped",
                    entity,
                    record.name()
                );
                return DispatchOutcome::MissingOwner;
            }
            self.spawn_link(entity, presentation);
        }

        let Some(link) = self.links.get_mut(&entity) else {
            return DispatchOutcome::MissingOwner;
        };
        let mut ctx = HookContext::new(presentation, &self.config);
        self.registry.dispatch(record, link, &mut ctx)
    }

    /// Delivers a component retraction to an entity. Unknown entities are
    /// ignored.
    pub fn apply_removal(
        &mut self,
        entity: EntityId,
        record: &dyn Component,
        presentation: &mut dyn Presentation,
    ) -> DispatchOutcome {
        let Some(link) = self.links.get_mut(&entity) else {
            debug!(
                "{}: removal of {} for an unlinked entity ignored",
                entity,
                record.name()
            );
            return DispatchOutcome::MissingOwner;
        };
        let mut ctx = HookContext::new(presentation, &self.config);
        self.registry.dispatch_removal(record, link, &mut ctx)
    }

    /// Drains a batch, applying each event in the order it was pushed
    pub fn receive_events(&mut self, events: &mut SyncEvents, presentation: &mut dyn Presentation) {
        let Some(batch) = events.take_events() else {
            return;
        };

        for event in batch {
            match event {
                SyncEvent::Spawn(entity) => {
                    if !self.spawn_link(entity, presentation) {
                        debug!("{}: already linked", entity);
                    }
                }
                SyncEvent::Change(entity, record) => {
                    self.apply_change(entity, record.as_ref(), presentation);
                }
                SyncEvent::Removal(entity, record) => {
                    self.apply_removal(entity, record.as_ref(), presentation);
                }
                SyncEvent::Despawn(entity) => {
                    self.despawn_link(entity, presentation);
                }
            }
        }
    }
}
