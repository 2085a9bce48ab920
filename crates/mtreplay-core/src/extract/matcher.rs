//! Brace matching over raw replay bytes.
//!
//! The matcher only tracks object depth, string mode and a single-level escape
//! flag. Numbers and literals never contain braces in valid JSON, so they need
//! no special handling.

/// Find the offset of the `}` that closes the object opening at `start`.
///
/// Returns `None` if `buffer[start]` is not `{` or the buffer ends before the
/// depth returns to zero.
///
/// # Example
///
/// ```
/// use mtreplay_core::extract::find_object_end;
///
/// let buffer = br#"xx{"a":{"b":"}"}}yy"#;
/// assert_eq!(find_object_end(buffer, 2), Some(16));
/// ```
pub fn find_object_end(buffer: &[u8], start: usize) -> Option<usize> {
    if buffer.get(start) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in buffer.iter().enumerate().skip(start) {
        match byte {
            b'"' if !escaped => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
        escaped = byte == b'\\' && !escaped;
    }

    None
}
