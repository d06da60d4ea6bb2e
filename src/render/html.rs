//! HTML fragment output.
//!
//! Each styled segment becomes a `<span>` carrying one class token per
//! active attribute (`bright`, `fg-red`, `bg-undefined`, ...). Unstyled
//! text is written bare. Line breaks become `<br>` and the pair-space
//! marker becomes `&nbsp;`, so the fragment keeps its spacing inside any
//! whitespace-collapsing container.

use std::io::{self, Write};

use super::Renderer;
use crate::colorize::{Segment, LINE_BREAK, NBSP};

#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Replace the colorizer's markers with their HTML forms.
///
/// Text is expected to be colorized with markup escaping on; `<` and `>`
/// are already entities by the time they get here.
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            LINE_BREAK => out.push_str("<br>"),
            NBSP => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}

impl Renderer for HtmlRenderer {
    fn segment(&mut self, segment: &Segment, out: &mut dyn Write) -> io::Result<()> {
        if segment.text().is_empty() {
            return Ok(());
        }
        let text = encode_text(segment.text());
        if segment.attributes().is_empty() {
            out.write_all(text.as_bytes())
        } else {
            write!(
                out,
                "<span class=\"{}\">{}</span>",
                segment.attributes(),
                text
            )
        }
    }
}
