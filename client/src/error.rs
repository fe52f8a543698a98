use exlink_shared::EntityId;
use thiserror::Error;

/// Errors returned by the checked `try_*` operations of the LinkManager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// A link already exists for the entity
    #[error("Entity {entity} is already linked to a scene node")]
    EntityAlreadyLinked { entity: EntityId },

    /// No link exists for the entity
    #[error("Entity {entity} has no link. It was never spawned or was already despawned")]
    EntityNotLinked { entity: EntityId },

    /// The link was destroyed and must not receive further dispatches
    #[error("Link for entity {entity} has been destroyed")]
    LinkDestroyed { entity: EntityId },
}
