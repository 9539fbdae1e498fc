//! Small helpers shared between the html-native crates.

pub mod warn;
pub mod env;
