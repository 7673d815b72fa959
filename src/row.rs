use std::cmp::Ordering;
use std::iter;

/// Appended to a row whose text did not fit.
pub const TRUNCATION_MARKER: char = '$';

/// Flattens `text` onto a single row of a terminal `width` columns wide.
///
/// Newlines become spaces. Text longer than `width` keeps its first `width - 1` characters
/// followed by [TRUNCATION_MARKER]; shorter text is padded with spaces to `width - 1`
/// characters. Text of exactly `width` characters is left alone. Widths are counted in
/// chars, not bytes.
pub fn normalize_row(text: &str, width: usize) -> String {
    let flattened = text.replace('\n', " ");
    let len = flattened.chars().count();
    match len.cmp(&width) {
        Ordering::Greater => {
            let mut row: String = flattened.chars().take(width.saturating_sub(1)).collect();
            row.push(TRUNCATION_MARKER);
            row
        }
        Ordering::Less => {
            let mut row = flattened;
            row.extend(iter::repeat(' ').take(width - 1 - len));
            row
        }
        Ordering::Equal => flattened,
    }
}
