//! # Exlink Shared
//! Entity ids, component kinds and the synchronized component records shared
//! between the networking collaborator and exlink-client.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod world;

pub use glam::{Quat, Vec3};

pub use world::{
    component::{
        component::Component,
        component_kind::ComponentKind,
        error::ComponentError,
        records::{Display, Nameplate, Typed},
    },
    entity::entity_id::EntityId,
};
