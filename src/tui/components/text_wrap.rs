//! Word wrapping for question prompts and recommendations.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! glyphs count double. Words longer than a full line are hard-split.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` to `width` columns, prefixing every line with `indent`.
///
/// The first line uses `first_prefix` in place of `indent`; both prefixes
/// must have the same display width. A zero usable width disables wrapping.
#[must_use]
pub fn wrap_with_prefix(text: &str, first_prefix: &str, indent: &str, width: usize) -> Vec<String> {
    let available = width.saturating_sub(UnicodeWidthStr::width(indent));
    if available == 0 {
        return vec![format!("{first_prefix}{text}")];
    }

    wrap_words(text, available)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let prefix = if index == 0 { first_prefix } else { indent };
            format!("{prefix}{line}")
        })
        .collect()
}

/// Wraps `text` at word boundaries so no line exceeds `width` columns.
///
/// Always returns at least one line, which may be empty.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0_usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width.saturating_add(1).saturating_add(word_width)
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            let mut pieces = hard_split(word, width);
            let tail = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = UnicodeWidthStr::width(tail.as_str());
            current = tail;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn hard_split(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0_usize;

    for ch in word.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if piece_width.saturating_add(char_width) > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width = piece_width.saturating_add(char_width);
    }

    pieces.push(piece);
    pieces
}
