//! Attribute maps for elements.

use kstring::KString;

use crate::MyFrom;

fn ks<T>(s: T) -> KString
where KString: MyFrom<T>
{
    KString::myfrom(s)
}

/// An attribute, ready to be put into an array passed as the
/// attributes argument of an element function.
pub fn att<T, U>(key: T, val: U) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    Some((ks(key), ks(val)))
}

/// An attribute that is only present if `val` is.
pub fn opt_att<T, U>(key: T, val: Option<U>) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    val.map(|val| (ks(key), ks(val)))
}

/// A boolean attribute like `checked`: printed without a value.
pub fn bool_att<T>(key: T) -> Option<(KString, KString)>
    where KString: MyFrom<T>
{
    Some((ks(key), KString::from_static("")))
}

/// A boolean attribute that is only present if `on` is true.
pub fn opt_bool_att<T>(key: T, on: bool) -> Option<(KString, KString)>
    where KString: MyFrom<T>
{
    if on { bool_att(key) } else { None }
}


/// Ordered attribute map. An empty value means a boolean attribute,
/// which is printed as the bare name. Setting an attribute that is
/// already present replaces its value, keeping its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(KString, KString)>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(Vec::new())
    }

    pub fn set(&mut self, name: KString, value: KString) -> &mut Self {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
        self
    }

    /// By-value variant of `set` with conversions, for building
    /// maps in an expression.
    pub fn with<T, U>(mut self, name: T, value: U) -> Self
        where KString: MyFrom<T> + MyFrom<U>
    {
        self.set(ks(name), ks(value));
        self
    }

    pub fn with_bool<T>(mut self, name: T) -> Self
        where KString: MyFrom<T>
    {
        self.set(ks(name), KString::from_static(""));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k.as_str() == name).map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<KString> {
        let i = self.0.iter().position(|(k, _)| k.as_str() == name)?;
        Some(self.0.remove(i).1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(KString, KString)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (KString, KString)>>(iter: I) -> Self {
        let mut atts = Attributes::new();
        for (k, v) in iter {
            atts.set(k, v);
        }
        atts
    }
}

/// What element functions accept as their attributes argument.
pub trait ToAttributes {
    fn to_attributes(self) -> Attributes;
}

impl ToAttributes for Attributes {
    fn to_attributes(self) -> Attributes {
        self
    }
}

impl ToAttributes for &Attributes {
    fn to_attributes(self) -> Attributes {
        self.clone()
    }
}

impl ToAttributes for Vec<(KString, KString)> {
    fn to_attributes(self) -> Attributes {
        self.into_iter().collect()
    }
}

// Only this one array impl, so that `[]` infers without annotation.
impl<const N: usize> ToAttributes for [Option<(KString, KString)>; N] {
    fn to_attributes(self) -> Attributes {
        self.into_iter().flatten().collect()
    }
}
