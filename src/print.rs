//! Writing out generated markup, and opt-in escaping.

use std::{borrow::Cow, io::Write};

use anyhow::Result;

use crate::{component::Renderable, fragment::Fragment};

pub const DOCTYPE: &str = "<!DOCTYPE html>\n";

pub trait Print {
    /// Print the markup as is.
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()>;

    /// Print the markup preceded by the HTML5 doctype declaration.
    fn print_html_document(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(DOCTYPE.as_bytes())?;
        self.print_html_fragment(out)
    }

    fn to_html_document_string(&self) -> Result<String> {
        let mut s = Vec::new();
        self.print_html_document(&mut s)?;
        Ok(String::from_utf8(s)?)
    }
}

impl Print for Fragment {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        self.with_text(|s| out.write_all(s.as_bytes()))?;
        Ok(())
    }
}

impl<R: Renderable + ?Sized> Print for R {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        self.render().print_html_fragment(out)
    }
}

/// Escape the characters with special meaning in HTML text and
/// attribute values. Never applied implicitly.
pub fn html_escape(s: &str) -> Cow<str> {
    if !s.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'')) {
        return Cow::Borrowed(s)
    }
    let mut buf = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c)
        }
    }
    Cow::Owned(buf)
}
