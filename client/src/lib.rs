//! # Exlink Client
//! Keeps the local scene presence of networked entities consistent with the
//! component records an authoritative source pushes for them.
//!
//! Records are routed by a [`HandlerRegistry`] to per-entity [`Hook`]s held
//! by each entity's [`EntityLink`]. Hooks create, update and destroy visual
//! resources through an injected [`Presentation`].

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use exlink_shared::{Component, ComponentKind, Display, EntityId, Nameplate, Quat, Typed, Vec3};

mod error;
mod events;
mod hooks;
mod link;
mod link_config;
mod presentation;
mod registry;
mod world;

pub use error::LinkError;
pub use events::{SyncEvent, SyncEvents};
pub use hooks::{change_hook, remove_hook, DisplayHook, Hook, HookContext, NameplateHook, TypedHook};
pub use link::{EntityLink, HookMap, LinkTarget};
pub use link_config::LinkConfig;
pub use presentation::{Presentation, PresentationError, ResourceHandle};
pub use registry::{ChangeFn, DispatchOutcome, HandlerRegistry, RegistryError, RemoveFn};
pub use world::LinkManager;
