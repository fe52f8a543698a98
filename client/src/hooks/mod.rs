mod display_hook;
mod hook;
mod nameplate_hook;
mod typed_hook;

pub use display_hook::DisplayHook;
pub use hook::{change_hook, remove_hook, Hook, HookContext};
pub use nameplate_hook::NameplateHook;
pub use typed_hook::TypedHook;
