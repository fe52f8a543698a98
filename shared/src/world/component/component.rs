use std::{any::Any, fmt::Debug};

use crate::{ComponentError, ComponentKind};

/// A Component is an immutable snapshot of one kind of synchronized entity
/// state. Every dispatch carries the full value.
pub trait Component: Any + Debug + Send + Sync + 'static {
    /// Name used in logs and error messages
    fn kind_name() -> &'static str
    where
        Self: Sized;

    fn name(&self) -> &'static str;
    fn kind(&self) -> ComponentKind;
    fn as_any(&self) -> &dyn Any;
    fn copy_to_box(&self) -> Box<dyn Component>;
}

impl dyn Component {
    /// Views a type-erased record as its concrete type
    pub fn downcast_ref<C: Component>(&self) -> Result<&C, ComponentError> {
        self.as_any()
            .downcast_ref::<C>()
            .ok_or(ComponentError::KindMismatch {
                expected: C::kind_name(),
                found: self.name(),
            })
    }

    pub fn is<C: Component>(&self) -> bool {
        self.as_any().is::<C>()
    }
}

/// Implements [`Component`] for a `Clone + Debug` record type.
#[macro_export]
macro_rules! impl_component {
    ($type:ty, $name:literal) => {
        impl $crate::Component for $type {
            fn kind_name() -> &'static str {
                $name
            }

            fn name(&self) -> &'static str {
                $name
            }

            fn kind(&self) -> $crate::ComponentKind {
                $crate::ComponentKind::of::<$type>()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn copy_to_box(&self) -> Box<dyn $crate::Component> {
                Box::new(self.clone())
            }
        }
    };
}
