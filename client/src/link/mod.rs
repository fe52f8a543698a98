mod entity_link;
mod hook_map;

pub use entity_link::{EntityLink, LinkTarget};
pub use hook_map::HookMap;
