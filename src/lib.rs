//! Watch Organizer Library
//!
//! Reclassifies a flat viewing-history export into movies and series,
//! grouped by show and season, and renders a browsable report.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
