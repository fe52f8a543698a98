use std::mem;

use exlink_shared::{Component, EntityId};

/// One authoritative state change as received from the networking layer
pub enum SyncEvent {
    Spawn(EntityId),
    Change(EntityId, Box<dyn Component>),
    /// Carries the last value the entity held
    Removal(EntityId, Box<dyn Component>),
    Despawn(EntityId),
}

impl SyncEvent {
    pub fn entity(&self) -> EntityId {
        match self {
            Self::Spawn(entity)
            | Self::Change(entity, _)
            | Self::Removal(entity, _)
            | Self::Despawn(entity) => *entity,
        }
    }
}

/// A batch of authoritative state changes, filled by the networking layer and
/// drained on the presentation thread by [`crate::LinkManager::receive_events`].
///
/// Events are kept in a single queue and drained in the order they were
/// pushed.
#[derive(Default)]
pub struct SyncEvents {
    events: Vec<SyncEvent>,
}

impl SyncEvents {
    pub fn new() -> Self {
        Self::default()
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn push_spawn(&mut self, entity: EntityId) {
        self.events.push(SyncEvent::Spawn(entity));
    }

    pub fn push_change<C: Component>(&mut self, entity: EntityId, record: C) {
        self.push_change_boxed(entity, Box::new(record));
    }

    pub fn push_change_boxed(&mut self, entity: EntityId, record: Box<dyn Component>) {
        self.events.push(SyncEvent::Change(entity, record));
    }

    /// Queues the retraction of a component. `record` is the last value the
    /// entity held.
    pub fn push_removal<C: Component>(&mut self, entity: EntityId, record: C) {
        self.push_removal_boxed(entity, Box::new(record));
    }

    pub fn push_removal_boxed(&mut self, entity: EntityId, record: Box<dyn Component>) {
        self.events.push(SyncEvent::Removal(entity, record));
    }

    pub fn push_despawn(&mut self, entity: EntityId) {
        self.events.push(SyncEvent::Despawn(entity));
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyncEvent> {
        self.events.iter()
    }

    // These methods are exposed for custom drain loops ... prefer LinkManager.receive_events() instead.
    pub fn take_events(&mut self) -> Option<Vec<SyncEvent>> {
        if self.events.is_empty() {
            None
        } else {
            Some(mem::take(&mut self.events))
        }
    }

    pub fn has_spawns(&self) -> bool {
        self.iter().any(|event| matches!(event, SyncEvent::Spawn(_)))
    }

    pub fn has_changes(&self) -> bool {
        self.iter().any(|event| matches!(event, SyncEvent::Change(..)))
    }

    pub fn has_removals(&self) -> bool {
        self.iter().any(|event| matches!(event, SyncEvent::Removal(..)))
    }

    pub fn has_despawns(&self) -> bool {
        self.iter().any(|event| matches!(event, SyncEvent::Despawn(_)))
    }
}
