//! Generating HTML from Rust code.
//!
//! Every supported element has a pair of generator functions in
//! `elements` (e.g. `div` and `div_with`), dispatching to
//! `render_tag`. Attributes are checked against an attribute
//! database and dropped if invalid for the element. The result is a
//! `Fragment`, which joins its pieces lazily and caches the result.
//!
//! Nothing is HTML-escaped implicitly, see `print::html_escape`.
//!
//! ```
//! use html_native::{elements::*, att};
//!
//! let page = div_with([att("class", "x"), att("bgcolor", "red")], || "hi");
//! assert_eq!(page.to_text(), "<div class=\"x\">hi</div>");
//! ```

pub mod fragment;
pub mod component;
pub mod attributes;
pub mod render;
pub mod elements;
pub mod logic;
pub mod print;

pub use html_native_meta::{myfrom::MyFrom, Tag, UnknownTagError, AttributeDb, Validity,
                           ATTRIBUTE_DB, is_valid, is_valid_for};
pub use fragment::{Fragment, Piece, ToPiece};
pub use component::{Renderable, FnComponent, component};
pub use attributes::{Attributes, ToAttributes, att, opt_att, bool_att, opt_bool_att};
pub use render::{render_tag, render_empty, render_with, render_tag_checked,
                 render_tag_named, set_trace, RenderError};
pub use logic::{when, unless, Conditional};
pub use print::{Print, html_escape, DOCTYPE};
