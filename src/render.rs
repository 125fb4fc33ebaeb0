//! Recursive dump of a decoded bencode tree.
//!
//! Output is one line per key, index or scalar, indented four spaces per
//! level. Dictionary keys are always sorted by byte value, and the binary
//! `pieces` field is summarised instead of printed.

use crate::config::{INDENT_WIDTH, PIECES_KEY};
use crate::models::Value;
use crate::style::{LABEL, OPAQUE, Styler, Tag};

/// Depth at which the top-level dictionary keys are printed
pub const ROOT_DEPTH: usize = 1;

/// Renders a [`Value`] tree as indented, optionally coloured lines.
///
/// Byte strings and dictionary keys are shown as text. Sequences that are
/// not valid UTF-8 are replaced with U+FFFD, so binary values other than
/// `pieces` print as replacement characters rather than failing.
pub struct ValueRenderer<'a> {
    styler: &'a Styler,
}

impl<'a> ValueRenderer<'a> {
    pub fn new(styler: &'a Styler) -> Self {
        Self { styler }
    }

    /// Render a whole decoded file
    pub fn render(&self, value: &Value) -> Vec<String> {
        self.render_at(value, ROOT_DEPTH, None)
    }

    /// Render `value` with its first line at `depth`.
    ///
    /// `parent_key` is the dictionary key the value was found under, if any.
    pub fn render_at(&self, value: &Value, depth: usize, parent_key: Option<&[u8]>) -> Vec<String> {
        let mut lines = Vec::new();
        self.push_value(&mut lines, value, depth, parent_key);
        lines
    }

    fn push_value(&self, out: &mut Vec<String>, value: &Value, depth: usize, key: Option<&[u8]>) {
        match value {
            Value::Dict(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));

                let key_tags: &[Tag] = if depth < 2 { LABEL } else { &[Tag::Green] };
                for (k, v) in entries {
                    let label = String::from_utf8_lossy(k);
                    self.push_line(out, depth, self.styler.style(&label, key_tags));
                    self.push_value(out, v, depth + 1, Some(k.as_slice()));
                }
            }
            Value::List(items) if items.len() == 1 => {
                self.push_value(out, &items[0], depth, None);
            }
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.push_line(out, depth, self.styler.style(&i.to_string(), LABEL));
                    self.push_value(out, item, depth + 1, None);
                }
            }
            Value::Integer(n) => {
                self.push_line(out, depth, self.styler.style(&n.to_string(), &[Tag::Cyan]));
            }
            Value::Bytes(bytes) if key == Some(PIECES_KEY) => {
                let summary = format!("[{} UTF-8 Bytes]", bytes.len());
                self.push_line(out, depth, self.styler.style(&summary, OPAQUE));
            }
            Value::Bytes(bytes) => {
                self.push_line(out, depth, String::from_utf8_lossy(bytes).into_owned());
            }
        }
    }

    fn push_line(&self, out: &mut Vec<String>, depth: usize, text: String) {
        out.push(format!("{}{}", " ".repeat(depth * INDENT_WIDTH), text));
    }
}
