//! `Fragment`, the lazily joining markup accumulator.

use std::{cell::RefCell,
          fmt::{self, Display},
          ops::{Add, AddAssign}};

use kstring::KString;

use crate::{component::Renderable, print::html_escape};

/// One item appended to a `Fragment`.
#[derive(Debug, Clone)]
pub enum Piece {
    Text(KString),
    /// Kept as is until the outer fragment is read.
    Fragment(Fragment),
}

impl Piece {
    fn write_into(self, out: &mut String) {
        match self {
            Piece::Text(s) => out.push_str(&s),
            Piece::Fragment(f) => f.with_text(|s| out.push_str(s)),
        }
    }

    pub fn into_fragment(self) -> Fragment {
        match self {
            Piece::Text(s) => Fragment::from(s),
            Piece::Fragment(f) => f,
        }
    }
}

/// Anything that can be appended to a `Fragment`: text, numbers,
/// other fragments (nested without being flattened), or references
/// to `Renderable` values (rendered at append time).
pub trait ToPiece {
    fn to_piece(self) -> Piece;
}

impl ToPiece for Piece {
    fn to_piece(self) -> Piece {
        self
    }
}

impl ToPiece for &str {
    fn to_piece(self) -> Piece {
        Piece::Text(KString::from_ref(self))
    }
}

impl ToPiece for String {
    fn to_piece(self) -> Piece {
        Piece::Text(KString::from_string(self))
    }
}

impl ToPiece for &String {
    fn to_piece(self) -> Piece {
        Piece::Text(KString::from_ref(self))
    }
}

impl ToPiece for KString {
    fn to_piece(self) -> Piece {
        Piece::Text(self)
    }
}

impl ToPiece for &KString {
    fn to_piece(self) -> Piece {
        Piece::Text(self.clone())
    }
}

impl ToPiece for char {
    fn to_piece(self) -> Piece {
        Piece::Text(KString::from_string(self.to_string()))
    }
}

impl ToPiece for Fragment {
    fn to_piece(self) -> Piece {
        Piece::Fragment(self)
    }
}

impl ToPiece for &Fragment {
    fn to_piece(self) -> Piece {
        Piece::Fragment(self.clone())
    }
}

impl<R: Renderable + ?Sized> ToPiece for &R {
    fn to_piece(self) -> Piece {
        Piece::Fragment(self.render())
    }
}

/// `None` appends nothing.
impl<T: ToPiece> ToPiece for Option<T> {
    fn to_piece(self) -> Piece {
        match self {
            Some(v) => v.to_piece(),
            None => Piece::Text(KString::from_static("")),
        }
    }
}

macro_rules! topiece_number {
    ($($t:ty)*) => {
        $(
            impl ToPiece for $t {
                fn to_piece(self) -> Piece {
                    Piece::Text(KString::from_string(self.to_string()))
                }
            }
        )*
    }
}

topiece_number!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64);


/// An accumulator of markup pieces. Appending is cheap: appended
/// items (including nested fragments) are only joined when the
/// text is requested, and the joined text is cached; subsequent
/// reads after further appends only join the newly appended items
/// onto the cache.
///
/// A fragment is either dirty (has pending items) or clean. Reading
/// the text makes it clean, appending makes it dirty. Only meant for
/// single threaded construction.
///
/// No HTML escaping happens anywhere in here: text is appended
/// verbatim. Use `push_escaped` or `html_escape` for untrusted text.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    cache: RefCell<String>,
    pending: RefCell<Vec<Piece>>,
}

impl Fragment {
    pub fn new() -> Self {
        Fragment::default()
    }

    /// A clean fragment holding `items`, already joined.
    pub fn from_pieces<T: ToPiece>(items: impl IntoIterator<Item = T>) -> Self {
        let mut fragment = Fragment::new();
        for item in items {
            fragment.push(item);
        }
        fragment.flush();
        fragment
    }

    /// Append `item`, returning self for chaining.
    pub fn push(&mut self, item: impl ToPiece) -> &mut Self {
        self.pending.get_mut().push(item.to_piece());
        self
    }

    /// Like `push` but by value, for chaining on temporaries.
    pub fn append(mut self, item: impl ToPiece) -> Self {
        self.push(item);
        self
    }

    /// Append `text` with the HTML special characters escaped.
    pub fn push_escaped(&mut self, text: &str) -> &mut Self {
        self.push(&*html_escape(text))
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending.borrow().is_empty()
    }

    fn flush(&self) {
        let mut pending = self.pending.borrow_mut();
        if pending.is_empty() {
            return
        }
        let mut cache = self.cache.borrow_mut();
        for piece in pending.drain(..) {
            piece.write_into(&mut cache);
        }
    }

    /// Gives access to the joined text without copying it.
    pub fn with_text<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        self.flush();
        f(&self.cache.borrow())
    }

    /// The joined text. Can be called any number of times.
    pub fn to_text(&self) -> String {
        self.with_text(|s| s.to_string())
    }

    pub fn into_text(self) -> String {
        self.flush();
        self.cache.into_inner()
    }

    /// Length of the joined text in bytes.
    pub fn len(&self) -> usize {
        self.with_text(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns self if `cond` is true, an empty fragment otherwise.
    pub fn if_true(self, cond: bool) -> Fragment {
        if cond {
            self
        } else {
            Fragment::new()
        }
    }

    /// Returns self if `cond` is false, an empty fragment otherwise.
    pub fn if_false(self, cond: bool) -> Fragment {
        self.if_true(!cond)
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment {
            cache: RefCell::new(s.to_string()),
            pending: RefCell::new(Vec::new()),
        }
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment {
            cache: RefCell::new(s),
            pending: RefCell::new(Vec::new()),
        }
    }
}

impl From<KString> for Fragment {
    fn from(s: KString) -> Self {
        Fragment::from(s.as_str())
    }
}

impl From<Fragment> for String {
    fn from(f: Fragment) -> Self {
        f.into_text()
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_text(|s| f.write_str(s))
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.with_text(|a| other.with_text(|b| a == b))
    }
}

impl Eq for Fragment {}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.with_text(|s| s == other)
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.with_text(|s| s == *other)
    }
}

impl<T: ToPiece> Add<T> for Fragment {
    type Output = Fragment;

    fn add(self, item: T) -> Fragment {
        self.append(item)
    }
}

impl<T: ToPiece> AddAssign<T> for Fragment {
    fn add_assign(&mut self, item: T) {
        self.push(item);
    }
}
