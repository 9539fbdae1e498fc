//! Conversions into `KString` for attribute names and values, and
//! for turning the compiled-in database into its indexed form.

use kstring::KString;

/// Own conversion trait, since `From` can't be given the impls below
/// for KString (they would conflict with the existing ones).
pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

// Always copies: the lifetime of the reference is unknown here, so
// `from_static` is not an option.
impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<&&str> for KString {
    fn myfrom(s: &&str) -> Self {
        KString::from_ref(*s)
    }
}

impl MyFrom<&String> for KString {
    fn myfrom(s: &String) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<&KString> for KString {
    fn myfrom(s: &KString) -> Self {
        s.clone()
    }
}

impl MyFrom<KString> for KString {
    fn myfrom(s: KString) -> Self {
        s
    }
}

macro_rules! myfrom_number {
    ($($t:ty)*) => {
        $(
            impl MyFrom<$t> for KString {
                fn myfrom(val: $t) -> Self {
                    KString::from_string(val.to_string())
                }
            }
        )*
    }
}

myfrom_number!(usize u32 u64 i32 i64 f64);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_myfrom() {
        let name = String::from("class");
        assert_eq!(KString::myfrom(&name).as_str(), "class");
        assert_eq!(KString::myfrom(&"id").as_str(), "id");
        assert_eq!(KString::myfrom(name).as_str(), "class");
        assert_eq!(KString::myfrom(3usize).as_str(), "3");
        assert_eq!(KString::myfrom(-1i64).as_str(), "-1");
        assert_eq!(KString::myfrom(0.5f64).as_str(), "0.5");
    }
}
