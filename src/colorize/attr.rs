//! Rendition attribute types.
//!
//! Contains the vocabulary the colorizer tags text with:
//! - Flag: boolean attributes selected by SGR 1-9 (bright, dim, italic, ...)
//! - Color: the 10-entry palette addressed by SGR 30-39 / 40-49
//! - Attribute: one entry of an attribute set (flag, foreground, background)
//! - AttributeSet: ordered set with at most one entry per category

use std::fmt;

use serde::{Serialize, Serializer};

/// Boolean rendition attributes, in SGR code order (code 1 = `Bright`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Bright,
    Dim,
    Italic,
    Underscore,
    Blink,
    BlinkRapid,
    Reverse,
    Hidden,
    Crossed,
}

impl Flag {
    const ALL: [Flag; 9] = [
        Flag::Bright,
        Flag::Dim,
        Flag::Italic,
        Flag::Underscore,
        Flag::Blink,
        Flag::BlinkRapid,
        Flag::Reverse,
        Flag::Hidden,
        Flag::Crossed,
    ];

    /// Look up the flag selected by an SGR code in `1..=9`.
    pub fn from_code(code: u32) -> Option<Self> {
        let index = usize::try_from(code.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// The SGR code that selects this flag.
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Class token used when rendering.
    pub fn name(self) -> &'static str {
        match self {
            Flag::Bright => "bright",
            Flag::Dim => "dim",
            Flag::Italic => "italic",
            Flag::Underscore => "underscore",
            Flag::Blink => "blink",
            Flag::BlinkRapid => "blinkRapid",
            Flag::Reverse => "reverse",
            Flag::Hidden => "hidden",
            Flag::Crossed => "crossed",
        }
    }
}

/// Palette colors, in palette index order (index 0 = `Black`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Extended,
    Default,
}

impl Color {
    /// The palette addressed by SGR color codes.
    pub const PALETTE: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Extended,
        Color::Default,
    ];

    /// Palette lookup. Returns `None` outside `0..10`.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::PALETTE.get(usize::try_from(index).ok()?).copied()
    }

    /// Position of this color in the palette.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Extended => "extended",
            Color::Default => "default",
        }
    }
}

/// One active rendition attribute.
///
/// `Background(None)` is a background entry whose palette lookup fell
/// outside the palette. It still occupies the background slot and renders
/// as the `bg-undefined` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Flag(Flag),
    Foreground(Color),
    Background(Option<Color>),
}

/// The slot an attribute occupies in an [`AttributeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Flag(Flag),
    Foreground,
    Background,
}

impl Attribute {
    fn category(&self) -> Category {
        match self {
            Attribute::Flag(flag) => Category::Flag(*flag),
            Attribute::Foreground(_) => Category::Foreground,
            Attribute::Background(_) => Category::Background,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Flag(flag) => f.write_str(flag.name()),
            Attribute::Foreground(color) => write!(f, "fg-{}", color.name()),
            Attribute::Background(Some(color)) => write!(f, "bg-{}", color.name()),
            Attribute::Background(None) => f.write_str("bg-undefined"),
        }
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered set of active attributes.
///
/// Holds at most one entry per category: one per flag, one foreground, one
/// background. Inserting evicts whatever occupies the category and appends
/// the new entry, so the most recently set attribute is always last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    entries: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.entries.contains(&attribute)
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.contains(Attribute::Flag(flag))
    }

    /// Active foreground color, if any.
    pub fn foreground(&self) -> Option<Color> {
        self.entries.iter().find_map(|a| match a {
            Attribute::Foreground(color) => Some(*color),
            _ => None,
        })
    }

    /// Active background entry, if any. The inner `None` is `bg-undefined`.
    pub fn background(&self) -> Option<Option<Color>> {
        self.entries.iter().find_map(|a| match a {
            Attribute::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// Insert an attribute, moving it to the end. Returns `true` if the set
    /// changed (in content or order).
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        if self.entries.last() == Some(&attribute) {
            return false;
        }
        let category = attribute.category();
        self.entries.retain(|a| a.category() != category);
        self.entries.push(attribute);
        true
    }

    /// Remove every attribute. Returns `true` if the set changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.entries.is_empty();
        self.entries.clear();
        changed
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

/// Space-separated class tokens, e.g. `bright fg-red`.
impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", attribute)?;
        }
        Ok(())
    }
}
