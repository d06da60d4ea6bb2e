//! JSON output: the segment list as an array of
//! `{"text": ..., "attributes": [...]}` objects.

use std::io::{self, Write};

use super::Renderer;
use crate::colorize::Segment;

#[derive(Debug, Default)]
pub struct JsonRenderer {
    count: usize,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for JsonRenderer {
    fn begin(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.count = 0;
        out.write_all(b"[")
    }

    fn segment(&mut self, segment: &Segment, out: &mut dyn Write) -> io::Result<()> {
        if self.count > 0 {
            out.write_all(b",")?;
        }
        self.count += 1;
        serde_json::to_writer(&mut *out, segment)?;
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"]\n")
    }
}
