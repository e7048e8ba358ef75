//! Core classification and grouping engine.
//!
//! Data flows strictly forward:
//! loader -> grouper -> classifier -> resolver -> aggregator.

pub mod aggregator;
pub mod classifier;
pub mod dates;
pub mod grouper;
pub mod loader;
pub mod resolver;
