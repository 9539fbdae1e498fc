//! Including markup conditionally without breaking up expressions.

use crate::fragment::{Fragment, ToPiece};

/// The result of `content` if `cond` is true, an empty fragment
/// otherwise. `content` is only called if needed.
pub fn when<C: ToPiece>(cond: bool, content: impl FnOnce() -> C) -> Fragment {
    if cond {
        content().to_piece().into_fragment()
    } else {
        Fragment::new()
    }
}

/// The result of `content` if `cond` is false, an empty fragment
/// otherwise.
pub fn unless<C: ToPiece>(cond: bool, content: impl FnOnce() -> C) -> Fragment {
    when(!cond, content)
}

/// `if_true`/`if_false` on anything that can be appended to a
/// fragment, e.g. `"selected".if_true(is_current)`.
pub trait Conditional {
    fn if_true(self, cond: bool) -> Fragment;
    fn if_false(self, cond: bool) -> Fragment;
}

impl<T: ToPiece> Conditional for T {
    fn if_true(self, cond: bool) -> Fragment {
        when(cond, || self)
    }

    fn if_false(self, cond: bool) -> Fragment {
        when(!cond, || self)
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{attributes::att, elements::{li_with, span_with}};

    #[test]
    fn t_when_unless() {
        let calls = Cell::new(0);
        let produce = || {
            calls.set(calls.get() + 1);
            "x"
        };
        assert_eq!(when(false, produce).to_text(), "");
        assert_eq!(calls.get(), 0);
        assert_eq!(when(true, produce).to_text(), "x");
        assert_eq!(calls.get(), 1);
        assert_eq!(unless(true, produce).to_text(), "");
        assert_eq!(unless(false, produce).to_text(), "x");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn t_conditional() {
        assert_eq!("a".if_true(true), "a");
        assert_eq!("a".if_true(false), "");
        assert_eq!(String::from("b").if_false(false), "b");
        assert_eq!(7u32.if_false(true), "");
        let current = 2;
        let items = Fragment::from_pieces((1..=3).map(|i| {
            li_with([], || {
                Fragment::new()
                    .append(i)
                    .append(span_with([att("class", "current")], || "*").if_true(i == current))
            })
        }));
        assert_eq!(items.to_text(),
                   "<li>1</li><li>2<span class=\"current\">*</span></li><li>3</li>");
    }
}
