use glam::{Quat, Vec3};

use crate::impl_component;

// Display
/// Visual representation of an entity: which prefab to show and where.
/// The prefab name identifies the resource; position and rotation are cheap
/// per-tick fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Display {
    pub prefab: String,
    pub position: Vec3,
    pub rotation: Quat,
}

impl Display {
    pub fn new(prefab: impl Into<String>) -> Self {
        Self {
            prefab: prefab.into(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

impl_component!(Display, "Display");

// Nameplate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nameplate {
    pub name: String,
}

impl Nameplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl_component!(Nameplate, "Nameplate");

// Typed
/// Gameplay type tag of an entity (e.g. "Player", "Npc", "Item")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typed {
    pub type_name: String,
}

impl Typed {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl_component!(Typed, "Typed");
