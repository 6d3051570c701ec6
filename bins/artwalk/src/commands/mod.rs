//! Subcommand implementations.

pub mod distance;
pub mod layout;
pub mod tours;
pub mod walk;
