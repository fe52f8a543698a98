use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

use crate::Component;

/// ComponentKind - type identity of a synchronized component record, used to
/// route records to their registered handlers
#[derive(Clone, Copy)]
pub struct ComponentKind {
    type_id: TypeId,
    name: &'static str,
}

impl ComponentKind {
    pub fn of<C: Component>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: C::kind_name(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Identity is the TypeId alone, the name only exists for logs
impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKind {}

impl Hash for ComponentKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKind({})", self.name)
    }
}
