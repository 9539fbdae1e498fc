//! The on-disk (JSON) representation of the attribute database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `limited` maps an attribute name to the element names it may be
/// used on; attributes not listed there are allowed everywhere
/// unless listed in `forbidden`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeDbJson {
    #[serde(default)]
    pub limited: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub forbidden: Vec<String>,
}
