//! Command-line front end for `normalform`.
//!
//! Builds a relation from a JSON file or from interactive prompts, normalizes
//! it into First Normal Form and renders the resulting relations.

pub mod input;
pub mod logging;
pub mod prompt;
pub mod render;
