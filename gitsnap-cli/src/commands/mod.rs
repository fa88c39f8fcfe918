//! CLI command implementations

pub mod import;
pub mod restore;

mod menu;

pub use import::ImportArgs;
pub use menu::menu;
pub use restore::RestoreArgs;
