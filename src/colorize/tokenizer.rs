//! Escape sequence tokenizer.
//!
//! Splits a log into literal text runs and SGR sequences. Recognized forms:
//! - `ESC [ <digits and ;> m`: SGR, emitted as [`Token::Sgr`]
//! - `ESC [ K`: erase in line, dropped
//! - `ESC ( x`: character set designation, dropped
//!
//! Any other `ESC`, including a sequence cut off at end of input, stays in
//! the text untouched. Scanning never fails.

use std::borrow::Cow;

use super::sgr::SgrParams;

const ESC: u8 = 0x1b;

/// Line terminators (`\r\n`, `\n`, `\r`) are normalized to this.
pub const LINE_BREAK: char = '\n';

/// Second space of every pair of spaces is replaced by this.
pub const NBSP: char = '\u{a0}';

/// Number of spaces a tab expands to.
pub const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Normalized literal text. Never empty.
    Text(Cow<'a, str>),
    Sgr(SgrParams<'a>),
}

/// Escape forms the scanner knows about.
enum Escape<'a> {
    Sgr(SgrParams<'a>),
    Dropped,
}

/// Lazy token stream over one log.
///
/// All scanning state lives in the iterator; dropping it half-way has no
/// effect on anything else.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    escape_markup: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            escape_markup: true,
        }
    }

    /// Whether `<` and `>` in text are turned into `&lt;` / `&gt;`.
    pub fn escape_markup(mut self, escape: bool) -> Self {
        self.escape_markup = escape;
        self
    }

    /// Match a recognized escape form starting at `at` (which holds `ESC`).
    /// Returns the form and the byte offset just past it.
    fn match_escape(&self, at: usize) -> Option<(Escape<'a>, usize)> {
        let bytes = self.input.as_bytes();
        match bytes.get(at + 1)? {
            b'[' => {
                let start = at + 2;
                if bytes.get(start) == Some(&b'K') {
                    return Some((Escape::Dropped, start + 1));
                }
                let end = start
                    + bytes[start..]
                        .iter()
                        .take_while(|b| b.is_ascii_digit() || **b == b';')
                        .count();
                if bytes.get(end) == Some(&b'm') {
                    let params = SgrParams::new(&self.input[start..end]);
                    return Some((Escape::Sgr(params), end + 1));
                }
                None
            }
            b'(' => {
                let designator = self.input[at + 2..].chars().next()?;
                if designator == '\n' || designator == '\r' {
                    return None;
                }
                Some((Escape::Dropped, at + 2 + designator.len_utf8()))
            }
            _ => None,
        }
    }

    fn text(&self, run: &'a str) -> Token<'a> {
        Token::Text(normalize_text(run, self.escape_markup))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.input.as_bytes();
        let mut start = self.pos;
        let mut cursor = self.pos;

        while cursor < bytes.len() {
            let Some(offset) = bytes[cursor..].iter().position(|b| *b == ESC) else {
                break;
            };
            let at = cursor + offset;

            let Some((escape, end)) = self.match_escape(at) else {
                // Not a form we know: the ESC is literal text
                cursor = at + 1;
                continue;
            };

            if at > start {
                // Flush the text first; the escape is handled on the next call
                self.pos = at;
                return Some(self.text(&self.input[start..at]));
            }

            self.pos = end;
            match escape {
                Escape::Sgr(params) => return Some(Token::Sgr(params)),
                Escape::Dropped => {
                    start = end;
                    cursor = end;
                }
            }
        }

        self.pos = bytes.len();
        if start < bytes.len() {
            Some(self.text(&self.input[start..]))
        } else {
            None
        }
    }
}

/// Normalize one literal text run, in order:
/// 1. `<` / `>` to `&lt;` / `&gt;` (when `escape_markup` is set)
/// 2. `\r\n`, `\n`, `\r` to [`LINE_BREAK`]
/// 3. tab to [`TAB_WIDTH`] spaces
/// 4. every pair of spaces `"  "` to `" "` + [`NBSP`], left to right
///
/// Borrows the input when nothing needs changing.
pub fn normalize_text(run: &str, escape_markup: bool) -> Cow<'_, str> {
    let needs_work = run.contains("  ")
        || run
            .bytes()
            .any(|b| b == b'\r' || b == b'\t' || (escape_markup && (b == b'<' || b == b'>')));
    if !needs_work {
        return Cow::Borrowed(run);
    }

    fn push_space(out: &mut String, open: &mut bool) {
        out.push(if *open { NBSP } else { ' ' });
        *open = !*open;
    }

    let mut out = String::with_capacity(run.len() + run.len() / 4);
    // Last char written was a space that opens a pair
    let mut open_space = false;

    let mut chars = run.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' => push_space(&mut out, &mut open_space),
            '\t' => {
                for _ in 0..TAB_WIDTH {
                    push_space(&mut out, &mut open_space);
                }
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(LINE_BREAK);
                open_space = false;
            }
            '\n' => {
                out.push(LINE_BREAK);
                open_space = false;
            }
            '<' if escape_markup => {
                out.push_str("&lt;");
                open_space = false;
            }
            '>' if escape_markup => {
                out.push_str("&gt;");
                open_space = false;
            }
            other => {
                out.push(other);
                open_space = false;
            }
        }
    }
    Cow::Owned(out)
}
