//! logtint: colorize build logs.
//!
//! The [`colorize`] module turns a log with ANSI/VT100 escape sequences into
//! styled [`Segment`]s; [`render`] writes them as HTML, terminal ANSI,
//! plain text or JSON; [`source`] reads logs from files or stdin.

pub mod cli;
pub mod colorize;
pub mod config;
pub mod error;
pub mod render;
pub mod source;

pub use colorize::{colorize, colorize_with, AttributeSet, ColorizeOptions, Segment};
pub use config::Config;
pub use error::{ConfigError, SourceError};
pub use render::{render_str, Format, Renderer};
pub use source::{source_for, FileSource, LogSource};
