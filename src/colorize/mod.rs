//! Build log colorizer.
//!
//! Turns a log containing ANSI/VT100 escape sequences into a stream of
//! [`Segment`]s: runs of normalized text tagged with the rendition
//! attributes active when the text was written.
//!
//! The pipeline is a single synchronous pass:
//! raw text → [`Tokenizer`] → SGR fold ([`sgr::apply`]) → [`Segments`].
//! Every parse owns its own state, so any number of logs can be colorized
//! concurrently.
//!
//! ```
//! use logtint::colorize::colorize;
//!
//! let segments: Vec<_> = colorize("\x1b[1;32mok\x1b[0m done").collect();
//! assert_eq!(segments[0].text(), "ok");
//! assert_eq!(segments[0].attributes().to_string(), "bright fg-green");
//! assert_eq!(segments[1].text(), " done");
//! ```

pub mod attr;
pub mod sgr;
mod spans;
mod tokenizer;

use serde::{Deserialize, Serialize};

pub use attr::{Attribute, AttributeSet, Color, Flag};
pub use sgr::{BackgroundPalette, SgrCode, SgrParams};
pub use spans::{Segment, Segments};
pub use tokenizer::{normalize_text, Token, Tokenizer, LINE_BREAK, NBSP, TAB_WIDTH};

/// Options for one colorize pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorizeOptions {
    /// Escape `<` and `>` in text as `&lt;` / `&gt;`
    pub escape_markup: bool,
    /// Palette offset used for background codes 40-49
    pub background_palette: BackgroundPalette,
}

impl Default for ColorizeOptions {
    fn default() -> Self {
        Self {
            escape_markup: true,
            background_palette: BackgroundPalette::Legacy,
        }
    }
}

/// Colorize `input` with default options.
pub fn colorize(input: &str) -> Segments<'_> {
    colorize_with(input, ColorizeOptions::default())
}

pub fn colorize_with(input: &str, options: ColorizeOptions) -> Segments<'_> {
    let tokens = Tokenizer::new(input).escape_markup(options.escape_markup);
    Segments::new(tokens, options.background_palette)
}
