/// Assert that an entity currently has a hook of the given type
#[macro_export]
macro_rules! assert_has_hook {
    ($manager:expr, $entity:expr, $hook:ty) => {
        assert!(
            $manager
                .link(&$entity)
                .map(|link| link.has_hook::<$hook>())
                .unwrap_or(false),
            "Expected {:?} to have hook {}",
            $entity,
            stringify!($hook)
        );
    };
}

/// Assert that an entity has no hook of the given type (or no link at all)
#[macro_export]
macro_rules! assert_no_hook {
    ($manager:expr, $entity:expr, $hook:ty) => {
        assert!(
            !$manager
                .link(&$entity)
                .map(|link| link.has_hook::<$hook>())
                .unwrap_or(false),
            "Expected {:?} to have no hook {}",
            $entity,
            stringify!($hook)
        );
    };
}
