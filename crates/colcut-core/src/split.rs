//! Relaxed comma splitting.
//!
//! A double quote toggles a quoted span wherever it appears, and a comma
//! inside a quoted span belongs to the field. Quotes are kept in the field
//! text and doubled quotes are not unescaped.

use std::ops::Range;

/// Splits a line (without its terminator) into field views.
///
/// An empty line yields a single empty field.
pub fn split_fields(line: &[u8]) -> Vec<&[u8]> {
    let mut spans = Vec::new();
    field_spans_into(line, &mut spans);
    spans.into_iter().map(|span| &line[span]).collect()
}

/// Writes the byte range of every field in `line` into `spans`.
///
/// `spans` is cleared first. Ranges hold no borrow of the line, so one
/// vector can serve every line of a source while the line buffer is refilled.
pub fn field_spans_into(line: &[u8], spans: &mut Vec<Range<usize>>) {
    spans.clear();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, &byte) in line.iter().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                spans.push(start..i);
                start = i + 1;
            }
            _ => {}
        }
    }

    spans.push(start..line.len());
}
