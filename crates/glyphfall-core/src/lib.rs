//! Core types for the glyphfall digital rain.
//!
//! Holds the compile-time configuration and the passive [`Cell`] value that
//! the column animator is built from.

mod cell;
pub mod config;

pub use cell::{Cell, opacity};
pub use config::Viewport;
