//! SGR (Select Graphic Rendition) handler.
//!
//! Folds the parameter list of one `ESC [ ... m` sequence into the running
//! attribute set:
//! - Reset (0, empty parameter, or no parameters)
//! - Flags: bright, dim, italic, underscore, blink, blinkRapid, reverse,
//!   hidden, crossed (1-9)
//! - Foreground palette colors (30-39)
//! - Background palette colors (40-49)
//!
//! Everything else is ignored.

use serde::{Deserialize, Serialize};

use super::attr::{Attribute, AttributeSet, Color, Flag};

/// How background codes (40-49) index the palette.
///
/// Build logs have historically been rendered with `code - 30`, the same
/// offset as foreground codes, so every background code lands outside the
/// palette and yields `bg-undefined`. `Legacy` keeps that output stable;
/// `Standard` uses `code - 40`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPalette {
    #[default]
    Legacy,
    Standard,
}

impl BackgroundPalette {
    fn offset(self) -> u32 {
        match self {
            BackgroundPalette::Legacy => 30,
            BackgroundPalette::Standard => 40,
        }
    }
}

/// One decoded SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Set(Attribute),
    Unknown(u32),
}

impl SgrCode {
    pub fn decode(param: u32, palette: BackgroundPalette) -> Self {
        match param {
            0 => SgrCode::Reset,
            1..=9 => match Flag::from_code(param) {
                Some(flag) => SgrCode::Set(Attribute::Flag(flag)),
                None => SgrCode::Unknown(param),
            },
            30..=39 => match Color::from_index(param - 30) {
                Some(color) => SgrCode::Set(Attribute::Foreground(color)),
                None => SgrCode::Unknown(param),
            },
            40..=49 => SgrCode::Set(Attribute::Background(Color::from_index(
                param - palette.offset(),
            ))),
            _ => SgrCode::Unknown(param),
        }
    }
}

/// Raw parameter text of an SGR sequence: the `1;32` in `ESC [ 1;32 m`.
///
/// Only ASCII digits and `;` ever appear in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrParams<'a>(&'a str);

impl<'a> SgrParams<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Numeric parameters. Empty parameters read as 0; values too large for
    /// `u32` saturate, which decodes as an unknown code.
    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        self.0.split(';').map(|p| {
            if p.is_empty() {
                0
            } else {
                p.parse().unwrap_or(u32::MAX)
            }
        })
    }
}

/// Apply one SGR sequence to `set`, parameter by parameter.
///
/// Returns `true` if any parameter modified the set. A sequence that undoes
/// its own changes (`31;0` on an empty set) still reports `true`.
pub fn apply(set: &mut AttributeSet, params: SgrParams<'_>, palette: BackgroundPalette) -> bool {
    let mut changed = false;
    for param in params.iter() {
        changed |= match SgrCode::decode(param, palette) {
            SgrCode::Reset => set.clear(),
            SgrCode::Set(attribute) => set.insert(attribute),
            SgrCode::Unknown(code) => {
                tracing::trace!(code, "ignoring unsupported SGR parameter");
                false
            }
        };
    }
    changed
}
