//! Terminal helpers for ArtWalk tools
//!
//! - Status messages and number formatting
//! - A render sink that prints session events

#![warn(missing_docs)]

pub mod output;
pub mod render;
