//! Generating markup for elements.
//!
//! NOTE: neither attribute values nor content are HTML-escaped. The
//! generated text is exactly the concatenation of what was passed
//! in, so callers embedding untrusted text must escape it themselves
//! (see `html_escape`), and host integrations must not blindly mark
//! the output as safe.

use std::{convert::Infallible, sync::atomic::{AtomicBool, Ordering}};

use html_native_meta::{Tag, UnknownTagError, Validity, ATTRIBUTE_DB};
use html_native_util::{env::get_env_bool, warn, warn_trace};
use lazy_static::lazy_static;

use crate::{attributes::{Attributes, ToAttributes},
            fragment::{Fragment, ToPiece}};

lazy_static!{
    /// If set, dropped attributes are reported on stderr. Initialized
    /// from the `HTML_NATIVE_TRACE` env var.
    pub static ref TRACE: AtomicBool = AtomicBool::new(
        get_env_bool("HTML_NATIVE_TRACE").unwrap_or_else(|e| {
            warn!("ignoring HTML_NATIVE_TRACE: {e:#}");
            false
        }));
}

pub fn set_trace(on: bool) {
    TRACE.store(on, Ordering::Relaxed);
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("attribute {attribute:?} is not allowed on element <{tag}>")]
    InvalidAttribute { tag: Tag, attribute: String },
    #[error("attribute {attribute:?} (on element <{tag}>) is forbidden")]
    ForbiddenAttribute { tag: Tag, attribute: String },
    #[error(transparent)]
    UnknownTag(#[from] UnknownTagError),
}

/// Print the opening tag up to (excluding) the closing `>` or `/>`,
/// handing attributes the database rejects to `on_invalid`.
fn open_tag<E>(
    tag: Tag,
    attributes: &Attributes,
    mut on_invalid: impl FnMut(&str, Validity) -> Result<(), E>,
) -> Result<String, E> {
    let db = &*ATTRIBUTE_DB;
    let mut s = String::new();
    s.push('<');
    s.push_str(tag.as_str());
    for (name, value) in attributes.iter() {
        match db.validity(tag.as_str(), name) {
            Validity::Allowed => {
                s.push(' ');
                s.push_str(name);
                if !value.is_empty() {
                    s.push_str("=\"");
                    s.push_str(value);
                    s.push('"');
                }
            }
            validity => on_invalid(name, validity)?
        }
    }
    Ok(s)
}

fn close_tag(tag: Tag) -> String {
    format!("</{}>", tag.as_str())
}

fn finish<F, C>(tag: Tag, mut open: String, content: Option<F>) -> Fragment
    where F: FnOnce() -> C,
          C: ToPiece
{
    match content {
        None => {
            open.push_str("/>");
            Fragment::from(open)
        }
        Some(content) => {
            open.push('>');
            let body = content();
            Fragment::from(open).append(body).append(close_tag(tag))
        }
    }
}

fn drop_invalid(tag: Tag) -> impl FnMut(&str, Validity) -> Result<(), Infallible> {
    move |name, validity| {
        warn_trace!(TRACE, "dropping attribute {name:?} on <{}>: {}",
                    tag.as_str(),
                    match validity {
                        Validity::Forbidden => "forbidden",
                        _ => "not allowed on this element",
                    });
        Ok(())
    }
}

/// Markup for the element `tag`: the self-closing form `<tag .../>`
/// if `content` is None, otherwise `<tag ...>`, the result of
/// calling `content` once, and `</tag>`. Attributes not valid for
/// `tag` are silently dropped. Attributes with an empty value are
/// printed as bare names.
pub fn render_tag<A, F, C>(tag: Tag, attributes: A, content: Option<F>) -> Fragment
    where A: ToAttributes,
          F: FnOnce() -> C,
          C: ToPiece
{
    let attributes = attributes.to_attributes();
    let open = match open_tag(tag, &attributes, drop_invalid(tag)) {
        Ok(s) => s,
        Err(e) => match e {},
    };
    finish(tag, open, content)
}

/// `render_tag` without content.
pub fn render_empty<A: ToAttributes>(tag: Tag, attributes: A) -> Fragment {
    render_tag(tag, attributes, None::<fn() -> &'static str>)
}

/// `render_tag` with content.
pub fn render_with<A, F, C>(tag: Tag, attributes: A, content: F) -> Fragment
    where A: ToAttributes,
          F: FnOnce() -> C,
          C: ToPiece
{
    render_tag(tag, attributes, Some(content))
}

/// Like `render_tag` but giving an error for the first attribute
/// that would be dropped. `content` is not called in that case.
pub fn render_tag_checked<A, F, C>(
    tag: Tag,
    attributes: A,
    content: Option<F>
) -> Result<Fragment, RenderError>
    where A: ToAttributes,
          F: FnOnce() -> C,
          C: ToPiece
{
    let attributes = attributes.to_attributes();
    let open = open_tag(tag, &attributes, |name, validity| {
        let attribute = name.to_string();
        Err(match validity {
            Validity::Forbidden => RenderError::ForbiddenAttribute { tag, attribute },
            _ => RenderError::InvalidAttribute { tag, attribute },
        })
    })?;
    Ok(finish(tag, open, content))
}

/// `render_tag` for element names only known at runtime.
pub fn render_tag_named<A, F, C>(
    name: &str,
    attributes: A,
    content: Option<F>
) -> Result<Fragment, UnknownTagError>
    where A: ToAttributes,
          F: FnOnce() -> C,
          C: ToPiece
{
    Ok(render_tag(Tag::from_name(name)?, attributes, content))
}
