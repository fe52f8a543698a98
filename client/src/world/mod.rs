mod link_manager;

pub use link_manager::LinkManager;
