//! CLI subcommand implementations.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod restart;
pub mod session;
pub mod summary;
