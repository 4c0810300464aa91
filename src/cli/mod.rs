//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing, the value enums and the merge of
//! flags with the config file.

mod args;
mod enums;

pub use args::Args;
pub use enums::{OutputKind, Paper};
