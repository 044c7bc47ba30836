//! CLI command implementations

pub mod add;
pub mod browse;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
