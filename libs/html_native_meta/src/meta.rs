//! Indexed attribute data for fast attribute validity checks.

use std::{collections::{BTreeMap, HashMap, HashSet},
          hash::Hash,
          path::Path};

use anyhow::{anyhow, Context, Result};
use html_native_util::{env::{get_env_bool, opt_get_env}, warn};
use kstring::KString;
use lazy_static::lazy_static;

use crate::{myfrom::MyFrom, tags::Tag, types::AttributeDbJson};

// =============================================================================
// Attributes database

// HTML attribute legality is mostly global (class, id, style,
// data-*, aria-*, event handlers); only a few attributes are limited
// to specific elements, and a few are deprecated or unsafe. Hence the
// database consists of an allow-list for the limited attributes, and
// a deny-list applying to all others.

// The data is included in the binary statically, but we want
// HashSet and HashMap for lookups, hence there are two variants of
// the datatypes, the Static* ones and the non-Static ones. At start
// time, the static ones are converted via MyFrom.

struct StaticSet<'t, T>(&'t [T]);

impl<'t, T1, T2: MyFrom<&'t T1> + Hash + Eq>
    MyFrom<&StaticSet<'t, T1>>
    for HashSet<T2>
{
    fn myfrom(v: &StaticSet<'t, T1>) -> Self {
        v.0.iter().map(|v| T2::myfrom(v)).collect()
    }
}

struct StaticMap<'t, K, V>(&'t [(K, V)]);

impl<'t, K1, V1, K2: MyFrom<&'t K1> + Hash + Eq, V2: MyFrom<&'t V1>>
    MyFrom<&StaticMap<'t, K1, V1>>
    for HashMap<K2, V2>
{
    fn myfrom(v: &StaticMap<'t, K1, V1>) -> Self {
        v.0.iter().map(|(k, v)| (K2::myfrom(k), V2::myfrom(v))).collect()
    }
}


/// Outcome of checking an attribute against an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Allowed,
    /// The attribute is limited to other elements.
    NotOnThisElement,
    /// The attribute is never allowed.
    Forbidden,
}

impl Validity {
    pub fn is_allowed(self) -> bool {
        self == Validity::Allowed
    }
}

#[derive(Debug)]
pub struct AttributeDb {
    /// Attribute name -> names of the elements it is allowed on.
    pub limited: HashMap<KString, HashSet<KString>>,
    /// Attributes never allowed (unless also in `limited`, which
    /// takes precedence).
    pub forbidden: HashSet<KString>,
}

struct StaticAttributeDb<'t> {
    limited: StaticMap<'t, &'t str, StaticSet<'t, &'t str>>,
    forbidden: StaticSet<'t, &'t str>,
}

impl<'t>
    MyFrom<&StaticAttributeDb<'t>>
    for AttributeDb
{
    fn myfrom(s: &StaticAttributeDb<'t>) -> Self {
        AttributeDb {
            limited: HashMap::myfrom(&s.limited),
            forbidden: HashSet::myfrom(&s.forbidden),
        }
    }
}

impl AttributeDb {
    /// The compiled-in database.
    pub fn builtin() -> AttributeDb {
        AttributeDb::myfrom(&STATIC_ATTRIBUTE_DB)
    }

    /// Element names are verified to be known `Tag`s.
    pub fn from_json(json: AttributeDbJson) -> Result<AttributeDb> {
        let mut limited = HashMap::new();
        for (attribute, tags) in json.limited {
            let mut tagset = HashSet::new();
            for tag in tags {
                Tag::from_name(&tag).with_context(
                    || anyhow!("allowed elements of attribute {attribute:?}"))?;
                tagset.insert(KString::from_string(tag));
            }
            limited.insert(KString::from_string(attribute), tagset);
        }
        let forbidden = json.forbidden.into_iter().map(KString::from_string).collect();
        Ok(AttributeDb { limited, forbidden })
    }

    /// Sorted, for stable output.
    pub fn to_json(&self) -> AttributeDbJson {
        let limited: BTreeMap<String, Vec<String>> =
            self.limited.iter().map(|(attribute, tags)| {
                let mut tags: Vec<String> = tags.iter().map(|t| t.as_str().to_owned()).collect();
                tags.sort();
                (attribute.as_str().to_owned(), tags)
            }).collect();
        let mut forbidden: Vec<String> =
            self.forbidden.iter().map(|a| a.as_str().to_owned()).collect();
        forbidden.sort();
        AttributeDbJson { limited, forbidden }
    }

    pub fn is_limited(&self, attribute: &str) -> bool {
        self.limited.contains_key(attribute)
    }

    pub fn is_forbidden(&self, attribute: &str) -> bool {
        self.forbidden.contains(attribute)
    }

    /// None if the attribute isn't limited to specific elements.
    pub fn allowed_tags(&self, attribute: &str) -> Option<&HashSet<KString>> {
        self.limited.get(attribute)
    }

    pub fn validity(&self, tag: &str, attribute: &str) -> Validity {
        if let Some(tags) = self.limited.get(attribute) {
            if tags.contains(tag) {
                Validity::Allowed
            } else {
                Validity::NotOnThisElement
            }
        } else if self.forbidden.contains(attribute) {
            Validity::Forbidden
        } else {
            Validity::Allowed
        }
    }

    /// Whether `attribute` may be used on the element `tag`. Total
    /// over all strings: unknown element names only get the
    /// attributes that aren't limited or forbidden.
    pub fn is_valid(&self, tag: &str, attribute: &str) -> bool {
        self.validity(tag, attribute).is_allowed()
    }
}


pub fn read_attribute_db_from_json(path: &Path) -> Result<AttributeDb> {
    (|| -> Result<AttributeDb> {
        let file = std::fs::File::open(path)?;
        let json: AttributeDbJson = serde_json::from_reader(std::io::BufReader::new(file))?;
        AttributeDb::from_json(json)
    })().with_context(|| anyhow!("reading attribute db from {path:?}"))
}

include!("../includes/static_attribute_db.rs");

pub fn read_attribute_db() -> Result<AttributeDb> {
    let debug = get_env_bool("HTML_NATIVE_DB_DEBUG").unwrap_or_else(|e| {
        warn!("ignoring HTML_NATIVE_DB_DEBUG: {e:#}");
        false
    });
    if let Some(path) = opt_get_env::<String>("HTML_NATIVE_DB_JSON")? {
        if debug { warn!("reading attribute db from json file {path:?}") };
        read_attribute_db_from_json(path.as_ref())
    } else {
        if debug { warn!("reading attribute db from static") };
        Ok(AttributeDb::builtin())
    }
}

lazy_static!{
    pub static ref ATTRIBUTE_DB: AttributeDb = read_attribute_db().unwrap_or_else(
        |e| panic!("could not load the attribute database: {e:#}"));
}

/// Checks if the attribute is valid for a given element name.
///
/// For example, `class` and `hidden` are valid everywhere, but
/// `autoplay` only on `video` and `audio`, and `bgcolor` nowhere.
pub fn is_valid(tag: &str, attribute: &str) -> bool {
    ATTRIBUTE_DB.is_valid(tag, attribute)
}

pub fn is_valid_for(tag: Tag, attribute: &str) -> bool {
    ATTRIBUTE_DB.is_valid(tag.as_str(), attribute)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_global_attributes() {
        let db = AttributeDb::builtin();
        for tag in Tag::all() {
            for att in ["class", "id", "style", "hidden", "data-foo", "aria-label", "onclick"] {
                assert!(db.is_valid(tag.as_str(), att), "{att} on {tag}");
            }
        }
        // also for names outside the tag set
        assert!(db.is_valid("blink", "class"));
    }

    #[test]
    fn t_limited_attributes() {
        let db = AttributeDb::builtin();
        assert!(db.is_valid("video", "autoplay"));
        assert!(db.is_valid("audio", "autoplay"));
        assert!(!db.is_valid("p", "autoplay"));
        assert_eq!(db.validity("p", "autoplay"), Validity::NotOnThisElement);
        assert!(db.is_valid("input", "checked"));
        assert!(!db.is_valid("div", "checked"));
        assert!(db.is_valid("label", "for"));
        assert!(db.is_valid("time", "datetime"));
        assert!(!db.is_valid("blink", "href"));
    }

    #[test]
    fn t_limited_matches_membership() {
        let db = AttributeDb::builtin();
        for (attribute, tags) in &db.limited {
            for tag in Tag::all() {
                assert_eq!(db.is_valid(tag.as_str(), attribute),
                           tags.contains(tag.as_str()),
                           "{attribute} on {tag}");
            }
        }
    }

    #[test]
    fn t_forbidden_attributes() {
        let db = AttributeDb::builtin();
        for att in ["background", "bgcolor", "border", "color", "manifest"] {
            assert!(db.is_forbidden(att));
            for tag in Tag::all() {
                assert_eq!(db.validity(tag.as_str(), att), Validity::Forbidden);
            }
        }
        assert!(!db.is_forbidden("class"));
    }

    #[test]
    fn t_builtin_tags_are_known() {
        let db = AttributeDb::builtin();
        for (attribute, tags) in &db.limited {
            for tag in tags {
                assert!(Tag::from_name(tag).is_ok(), "{tag} in {attribute}");
            }
        }
        assert_eq!(db.allowed_tags("autoplay").map(|s| s.len()), Some(2));
        assert!(db.allowed_tags("class").is_none());
    }

    #[test]
    fn t_json() {
        let db = AttributeDb::builtin();
        let json = db.to_json();
        assert_eq!(json.limited.get("autoplay"),
                   Some(&vec!["audio".to_string(), "video".to_string()]));
        assert_eq!(json.forbidden,
                   ["background", "bgcolor", "border", "color", "manifest"]);
        let db2 = AttributeDb::from_json(json.clone()).unwrap();
        assert_eq!(db2.to_json(), json);
    }

    #[test]
    fn t_json_override() {
        let json: AttributeDbJson = serde_json::from_str(
            r#"{"limited": {"autoplay": ["p"]}, "forbidden": ["class"]}"#).unwrap();
        let db = AttributeDb::from_json(json).unwrap();
        assert!(db.is_valid("p", "autoplay"));
        assert!(!db.is_valid("video", "autoplay"));
        assert!(!db.is_valid("div", "class"));
        assert!(db.is_valid("div", "bgcolor"));

        let json: AttributeDbJson = serde_json::from_str(
            r#"{"limited": {"autoplay": ["blink"]}}"#).unwrap();
        let e = AttributeDb::from_json(json).unwrap_err();
        assert!(format!("{e:#}").contains("blink"));
    }

    #[test]
    fn t_read_from_file() {
        let path = std::env::temp_dir().join(
            format!("html_native_meta_t_read_from_file_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"limited": {"open": ["details", "dialog"]}}"#).unwrap();
        let db = read_attribute_db_from_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(db.is_valid("dialog", "open"));
        assert!(db.forbidden.is_empty());

        assert!(read_attribute_db_from_json(&path).is_err());
    }

    #[test]
    fn t_json_forbidden_only() {
        let json: AttributeDbJson = serde_json::from_str(r#"{"forbidden": ["class"]}"#).unwrap();
        assert!(json.limited.is_empty());
        let db = AttributeDb::from_json(json).unwrap();
        assert!(!db.is_valid("div", "class"));
        assert!(db.is_valid("p", "autoplay"));
    }

    // The only test in this crate touching these env vars; nothing
    // here initializes ATTRIBUTE_DB.
    #[test]
    fn t_read_attribute_db_from_env() {
        let path = std::env::temp_dir().join(
            format!("html_native_meta_t_read_attribute_db_from_env_{}.json",
                    std::process::id()));
        std::fs::write(&path, r#"{"limited": {"autoplay": ["p"]}}"#).unwrap();
        std::env::set_var("HTML_NATIVE_DB_DEBUG", "1");
        std::env::set_var("HTML_NATIVE_DB_JSON", &path);
        let db = read_attribute_db().unwrap();
        assert!(db.is_valid("p", "autoplay"));
        assert!(!db.is_valid("video", "autoplay"));
        assert!(db.is_valid("div", "bgcolor"));

        std::fs::remove_file(&path).unwrap();
        assert!(read_attribute_db().is_err());

        std::env::remove_var("HTML_NATIVE_DB_JSON");
        std::env::set_var("HTML_NATIVE_DB_DEBUG", "not a bool");
        let db = read_attribute_db().unwrap();
        assert!(db.is_valid("video", "autoplay"));
        assert!(!db.is_valid("div", "bgcolor"));
        std::env::remove_var("HTML_NATIVE_DB_DEBUG");
    }
}
