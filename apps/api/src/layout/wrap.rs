//! Greedy line wrapping against the static font metrics.
//!
//! # Rules
//! - Explicit newlines always start a new line; blank input lines are kept as empty lines.
//! - Words are separated by single spaces on output, whatever the input spacing.
//! - A word wider than the whole line is split at character boundaries.

use crate::layout::font_metrics::FontMetricTable;

/// Wraps `text` into lines no wider than `max_width_mm` at `size_pt`.
///
/// An empty string yields no lines.
pub fn wrap_lines(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let space_w = metrics.width_mm(" ", size_pt);
    let mut lines = Vec::new();

    for raw_line in text.trim_end().lines() {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in raw_line.split_whitespace() {
            for piece in split_long_word(word, metrics, size_pt, max_width_mm) {
                let piece_w = metrics.width_mm(&piece, size_pt);
                if current.is_empty() {
                    current_width = piece_w;
                    current = piece;
                } else if current_width + space_w + piece_w > max_width_mm {
                    // Current line is full: flush it and start a new one with this word.
                    lines.push(std::mem::take(&mut current));
                    current_width = piece_w;
                    current = piece;
                } else {
                    current.push(' ');
                    current.push_str(&piece);
                    current_width += space_w + piece_w;
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Splits a single word into chunks that each fit on one line.
fn split_long_word(
    word: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    if metrics.width_mm(word, size_pt) <= max_width_mm {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if !current.is_empty() && metrics.width_mm(&candidate, size_pt) > max_width_mm {
            pieces.push(std::mem::replace(&mut current, c.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Glyphs WinAnsiEncoding places at 0x80..=0x9F. `None` marks unused slots.
#[rustfmt::skip]
const WIN_ANSI_80_9F: [Option<char>; 32] = [
    Some('\u{20AC}'), None,              Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,              Some('\u{017D}'), None,
    None,              Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None,              Some('\u{017E}'), Some('\u{0178}'),
];

/// True when the built-in fonts have a glyph for `c`.
fn in_win_ansi(c: char) -> bool {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => true,
        _ => WIN_ANSI_80_9F.contains(&Some(c)),
    }
}

/// Maps text onto the character set the built-in PDF fonts can show (WinAnsi).
///
/// Typographic punctuation becomes its ASCII look-alike, tabs become spaces,
/// control characters other than newlines are dropped, and anything without a
/// WinAnsi glyph becomes `?`.
pub fn to_pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'".to_string(),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"".to_string(),
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => {
                "-".to_string()
            }
            '\u{2022}' | '\u{25CF}' | '\u{25AA}' => "-".to_string(),
            '\u{2026}' => "...".to_string(),
            '\u{00A0}' | '\t' => " ".to_string(),
            '\n' => "\n".to_string(),
            c if c.is_control() => String::new(),
            c if in_win_ansi(c) => c.to_string(),
            _ => "?".to_string(),
        })
        .collect()
}
