//! One pair of functions per supported element: `div(attributes)`
//! gives the self-closing `<div/>` form, `div_with(attributes, ||
//! content)` the container form. Both drop attributes not valid for
//! the element, and escape nothing.

use html_native_meta::{with_tag_list, Tag};

use crate::{attributes::ToAttributes,
            fragment::{Fragment, ToPiece},
            render::{render_empty, render_with}};

macro_rules! define_element_functions {
    ( $( ($variant:ident, $fn_name:ident, $fn_with:ident, $name:literal) ),* $(,)? ) => {
        $(
            #[doc = concat!("A self-closing `<", $name, "/>` element.")]
            pub fn $fn_name(attributes: impl ToAttributes) -> Fragment {
                render_empty(Tag::$variant, attributes)
            }

            #[doc = concat!("A `<", $name, ">` element around the result of `content`.")]
            pub fn $fn_with<C: ToPiece>(
                attributes: impl ToAttributes,
                content: impl FnOnce() -> C
            ) -> Fragment {
                render_with(Tag::$variant, attributes, content)
            }
        )*
    }
}

with_tag_list!(define_element_functions);
