//! Terminal emphasis for rendered output.

/// Semantic emphasis applied to a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Bright,
    White,
    Green,
    Red,
    Cyan,
    Yellow,
    Magenta,
    Dull,
}

impl Tag {
    /// Order in which codes are emitted, independent of how tags were given
    const ALL: [Tag; 8] = [
        Tag::Bright,
        Tag::White,
        Tag::Green,
        Tag::Red,
        Tag::Cyan,
        Tag::Yellow,
        Tag::Magenta,
        Tag::Dull,
    ];

    /// SGR parameter for this tag
    pub fn code(self) -> u8 {
        match self {
            Tag::Bright => 1,
            Tag::Dull => 22,
            Tag::White => 37,
            Tag::Green => 32,
            Tag::Red => 31,
            Tag::Cyan => 36,
            Tag::Yellow => 33,
            Tag::Magenta => 35,
        }
    }
}

/// Label emphasis used for keys, indices and field names
pub const LABEL: &[Tag] = &[Tag::Bright, Tag::Yellow];

/// Emphasis for elided binary data
pub const OPAQUE: &[Tag] = &[Tag::Bright, Tag::Red];

const RESET: &str = "\x1b[0m";

/// Applies ANSI escape sequences to text, or passes it through untouched
/// when colours are turned off.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A styler that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Prefix `text` with one escape sequence per distinct tag, then reset.
    pub fn style(&self, text: &str, tags: &[Tag]) -> String {
        if !self.enabled || tags.is_empty() {
            return text.to_string();
        }

        let mut styled: String = Tag::ALL
            .iter()
            .copied()
            .filter(|tag| tags.contains(tag))
            .map(|tag| format!("\x1b[{}m", tag.code()))
            .collect();
        styled.push_str(text);
        styled.push_str(RESET);
        styled
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(true)
    }
}
