//! Output generators.

pub mod html;
pub mod json;
