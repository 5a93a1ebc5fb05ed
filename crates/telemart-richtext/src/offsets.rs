//! Offset conversion between the UTF-16 code units used on the wire and
//! the UTF-8 byte indexing of Rust strings.
//!
//! Telegram measures entity offsets and lengths in UTF-16 code units (the
//! JavaScript string convention), while Rust strings index by UTF-8 bytes.
//! Every wire offset is re-indexed exactly once before the renderer sweeps
//! the text; callers that measure in any other unit must convert first or
//! their boundaries will silently misalign.

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 code-unit offset to a UTF-8 byte offset.
///
/// An offset landing inside a surrogate pair snaps down to the start of
/// the code point, so a multi-unit character is never split. Offsets past
/// the end map to `text.len()`.
///
/// O(n), which is fine at message scale; offsets are converted once per
/// entity boundary, not per character.
pub fn utf16_to_byte(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in text.char_indices() {
        if utf16_offset < units + ch.len_utf16() {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Convert a UTF-8 byte offset to a UTF-16 code-unit offset.
///
/// Counts the code units of every character starting strictly before
/// `byte_offset`, so a mid-code-point byte offset likewise snaps down.
pub fn byte_to_utf16(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|(idx, _)| *idx < byte_offset)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}
