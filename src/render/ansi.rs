//! ANSI escape code conversion utilities.
//!
//! Converts attribute sets back to SGR sequences for terminal output.

use std::borrow::Cow;
use std::io::{self, Write};

use super::{fold_markers, Renderer};
use crate::colorize::{Attribute, AttributeSet, Segment};

const RESET: &str = "\x1b[0m";

/// Caret notation for an `ESC` left in the text.
const VISIBLE_ESC: &str = "^[";

/// SGR code for one attribute.
///
/// Backgrounds always use the standard `40 + index` codes here, whatever
/// palette the log was parsed with.
///
/// # Returns
/// `None` for a background outside the palette (`bg-undefined`), which has
/// no terminal equivalent
pub fn attribute_to_sgr(attribute: &Attribute) -> Option<u8> {
    match attribute {
        Attribute::Flag(flag) => Some(flag.code()),
        Attribute::Foreground(color) => Some(30 + color.index()),
        Attribute::Background(Some(color)) => Some(40 + color.index()),
        Attribute::Background(None) => None,
    }
}

/// Append one SGR sequence per attribute, in set order.
///
/// # Arguments
/// * `attributes` - The attribute set to convert
/// * `buf` - The output buffer to append to
///
/// # Returns
/// `true` if at least one sequence was appended
pub fn attributes_to_ansi(attributes: &AttributeSet, buf: &mut String) -> bool {
    let mut wrote = false;
    for code in attributes.iter().filter_map(attribute_to_sgr) {
        buf.push_str("\x1b[");
        buf.push_str(&code.to_string());
        buf.push('m');
        wrote = true;
    }
    wrote
}

/// Make escapes the colorizer kept as text (unknown or cut-off sequences)
/// visible instead of letting the terminal act on them.
pub fn show_escapes(text: &str) -> Cow<'_, str> {
    if text.contains('\x1b') {
        Cow::Owned(text.replace('\x1b', VISIBLE_ESC))
    } else {
        Cow::Borrowed(text)
    }
}

/// Renders segments for a terminal.
#[derive(Debug, Default)]
pub struct AnsiRenderer {
    /// A style is active on the terminal and needs a reset
    styled: bool,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for AnsiRenderer {
    fn segment(&mut self, segment: &Segment, out: &mut dyn Write) -> io::Result<()> {
        let mut buf = String::with_capacity(segment.text().len() + 16);
        if self.styled {
            buf.push_str(RESET);
        }
        self.styled = attributes_to_ansi(segment.attributes(), &mut buf);
        buf.push_str(&show_escapes(&fold_markers(segment.text())));
        out.write_all(buf.as_bytes())
    }

    fn finish(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.styled {
            self.styled = false;
            out.write_all(RESET.as_bytes())?;
        }
        Ok(())
    }
}
