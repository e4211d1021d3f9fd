//! Bundled and synthetic forecast tables.
//!
//! - the source fixture used by the demo and the end-to-end tests (`sample`)
//! - a seeded generator for arbitrary-size synthetic tables (`sample`)

pub mod sample;

pub use sample::*;
