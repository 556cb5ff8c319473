//! Remarks text handling
//!
//! Remarks are split on explicit newlines only. A line is the unit of
//! placement and is never wrapped or measured.

/// Split remarks into placement lines.
///
/// Empty text has no lines. Otherwise every `\n` separates two lines, so a
/// trailing newline yields a trailing empty line and joining the result
/// with `\n` gives back the original text.
pub fn split_remarks(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_owned).collect()
}

/// Whole remarks lines fitting in `available_mm`.
///
/// Never negative. A non-positive or non-finite line height fits nothing.
pub fn remarks_line_capacity(available_mm: f32, line_mm: f32) -> usize {
    if !line_mm.is_finite() || line_mm <= 0.0 || available_mm.is_nan() || available_mm <= 0.0 {
        return 0;
    }
    let lines = (available_mm / line_mm).floor();
    if lines.is_finite() { lines as usize } else { 0 }
}
