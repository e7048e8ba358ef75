//! CLI command implementations.

pub mod export;
pub mod organize;
pub mod stats;
