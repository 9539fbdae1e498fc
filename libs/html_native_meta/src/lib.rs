//! The closed set of supported HTML5 elements and the database
//! deciding which attributes may be used on which of them.

pub mod myfrom;
pub mod tags;
pub mod types;
pub mod meta;

pub use tags::{Tag, UnknownTagError};
pub use meta::{AttributeDb, Validity, ATTRIBUTE_DB, is_valid, is_valid_for};
