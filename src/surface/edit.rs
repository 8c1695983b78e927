//! Char-offset editing helpers shared by the interceptor and hosts.

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Clamp a range to `len` and put it in ascending order
pub fn normalize_range(start: usize, end: usize, len: usize) -> (usize, usize) {
    let start = start.min(len);
    let end = end.min(len);
    if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

/// Byte offset of the char at `char_idx`, or `text.len()` past the end
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Substring covering chars `[start, end)` after normalisation
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let (start, end) = normalize_range(start, end, char_len(text));
    &text[byte_offset(text, start)..byte_offset(text, end)]
}

/// Replace chars `[start, end)` with `insert`.
///
/// Returns the new value and the cursor position just after the insertion.
pub fn splice(text: &str, start: usize, end: usize, insert: &str) -> (String, usize) {
    let (start, end) = normalize_range(start, end, char_len(text));
    let head = &text[..byte_offset(text, start)];
    let tail = &text[byte_offset(text, end)..];

    let mut result = String::with_capacity(head.len() + insert.len() + tail.len());
    result.push_str(head);
    result.push_str(insert);
    result.push_str(tail);

    (result, start + char_len(insert))
}
