//! Transcoding between stored markup and plain-text editing.
//!
//! Stored article content keeps line breaks as an inline `<br>` marker so
//! the record stays single-logical-line markup. Plain-text editors load
//! through [`breaks_to_newlines`] and save through [`newlines_to_breaks`];
//! the two must compose to an exact round trip for any content produced by
//! that editing flow.

/// Inline marker a plain-text editor's newlines are stored as.
pub const BREAK_MARKER: &str = "<br>";

/// Decode stored content for a plain-text editing field: every `<br>`
/// becomes a newline.
pub fn breaks_to_newlines(stored: &str) -> String {
    stored.replace(BREAK_MARKER, "\n")
}

/// Encode an edited plain-text field back to stored form: every newline
/// becomes `<br>`.
///
/// The pair is an exact inverse for content that went through the editing
/// flow, which never stores a raw newline. Content that already contains a
/// literal `<br>` before its first edit would be rewritten to a newline on
/// load and re-encoded on save, which is the intended normalization.
pub fn newlines_to_breaks(edited: &str) -> String {
    edited.replace('\n', BREAK_MARKER)
}
