//! Lenient parsing of id path segments.

/// Parses the leading base-10 integer of a path segment.
///
/// Leading whitespace and a sign are accepted, and parsing stops at the first
/// non-digit, so `"12abc"` yields `12`. Returns `None` when the segment has no
/// numeric prefix or overflows `i64`; callers turn that into a not-found
/// response since no stored id can match.
pub fn parse_id(segment: &str) -> Option<i64> {
    let trimmed = segment.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    format!("{sign}{}", &rest[..digits_len]).parse().ok()
}
