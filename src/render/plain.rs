//! Plain text output: segment text only, styling dropped.

use std::io::{self, Write};

use super::{fold_markers, Renderer};
use crate::colorize::Segment;

#[derive(Debug, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PlainRenderer {
    fn segment(&mut self, segment: &Segment, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(fold_markers(segment.text()).as_bytes())
    }
}
