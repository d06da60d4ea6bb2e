//! Segment renderers.
//!
//! A renderer realises attribute sets for one output target:
//! - html: `<span class="...">` fragments, like the web log viewer
//! - ansi: SGR sequences for a terminal
//! - plain: text only
//! - json: the raw segment list

pub mod ansi;
pub mod html;
pub mod json;
pub mod plain;

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::colorize::{colorize_with, ColorizeOptions, Segment, NBSP};

pub use ansi::AnsiRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use plain::PlainRenderer;

/// Writes segments to an output.
pub trait Renderer {
    /// Called once before the first segment.
    fn begin(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn segment(&mut self, segment: &Segment, out: &mut dyn Write) -> io::Result<()>;

    /// Called once after the last segment.
    fn finish(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Drive `renderer` over every segment.
pub fn render<I>(renderer: &mut dyn Renderer, segments: I, out: &mut dyn Write) -> io::Result<()>
where
    I: IntoIterator<Item = Segment>,
{
    renderer.begin(out)?;
    for segment in segments {
        renderer.segment(&segment, out)?;
    }
    renderer.finish(out)
}

/// Turn pair-space markers back into plain spaces.
pub(crate) fn fold_markers(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains(NBSP) {
        std::borrow::Cow::Owned(text.replace(NBSP, " "))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}

/// Output format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// ansi when writing to a terminal, html otherwise
    #[default]
    Auto,
    Html,
    Ansi,
    Plain,
    Json,
}

impl Format {
    /// Settle `Auto` for the given output.
    pub fn resolve(self, to_terminal: bool) -> Format {
        match self {
            Format::Auto if to_terminal => Format::Ansi,
            Format::Auto => Format::Html,
            other => other,
        }
    }

    pub fn renderer(self) -> Box<dyn Renderer + Send> {
        match self {
            Format::Auto | Format::Html => Box::new(HtmlRenderer::new()),
            Format::Ansi => Box::new(AnsiRenderer::new()),
            Format::Plain => Box::new(PlainRenderer::new()),
            Format::Json => Box::new(JsonRenderer::new()),
        }
    }

    /// Colorize options for this target. Markup escaping is forced on for
    /// html and off for terminal and plain text; json keeps the caller's.
    pub fn colorize_options(self, base: ColorizeOptions) -> ColorizeOptions {
        let escape_markup = match self {
            Format::Auto | Format::Html => true,
            Format::Ansi | Format::Plain => false,
            Format::Json => base.escape_markup,
        };
        ColorizeOptions {
            escape_markup,
            ..base
        }
    }

    /// File extension for rendered output.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Auto | Format::Html => "html",
            Format::Ansi => "ansi",
            Format::Plain => "txt",
            Format::Json => "json",
        }
    }
}

/// Colorize and render `input` in one go.
pub fn render_to_writer(
    input: &str,
    format: Format,
    options: ColorizeOptions,
    out: &mut dyn Write,
) -> io::Result<()> {
    let options = format.colorize_options(options);
    let mut renderer = format.renderer();
    render(renderer.as_mut(), colorize_with(input, options), out)
}

/// Colorize and render `input` into a string.
pub fn render_str(input: &str, format: Format, options: ColorizeOptions) -> String {
    let mut out = Vec::with_capacity(input.len() + input.len() / 2);
    // Writing into a Vec cannot fail
    let _ = render_to_writer(input, format, options, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
