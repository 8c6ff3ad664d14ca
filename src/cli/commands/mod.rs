//! CLI command implementations

pub mod add;
pub mod backup;
pub mod import;
pub mod list;
pub mod session;
pub mod show;
