//! Configuration loading and schema definitions
//!
//! Settings for the tour session, catalog location and logging.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
