//! Outer surfaces: the command line and its JSON parameter files.

pub mod cli;
pub mod json;
