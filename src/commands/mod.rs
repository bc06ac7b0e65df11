//! CLI command implementations.

pub mod restore;
pub mod status;
pub mod uninstall;
pub mod update;
