use crate::character_sets::is_token_byte;

/// Check if a code point is a `tchar`.
/// `tchar` is ASCII-only, so anything above U+007F is rejected before the table is consulted.
#[inline]
pub fn is_token_rune(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_token_byte)
}

/// Check if a string is a valid header field name (RFC 7230 `token`).
///
/// Pure ASCII input is classified byte by byte through the lookup table
/// without decoding. A non-ASCII lead byte falls back to decoding the full
/// code point, which [`is_token_rune`] then rejects.
///
/// No case folding is performed.
pub fn valid_header_field_name(input: &str) -> bool {
    !input.is_empty() && find_non_token(input).is_none()
}

/// Same as [`valid_header_field_name`] for arbitrary bytes.
/// Malformed UTF-8 decodes to U+FFFD, which is not a token character.
pub fn valid_header_field_name_bytes(input: &[u8]) -> bool {
    !input.is_empty() && find_non_token_bytes(input).is_none()
}

/// Byte offset of the first code point that is not a `tchar`, if any.
///
/// The empty string has no offending code point and returns `None`;
/// use [`valid_header_field_name`] to also reject empty input.
pub fn find_non_token(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        if b.is_ascii() {
            if !is_token_byte(b) {
                return Some(pos);
            }
            pos += 1;
            continue;
        }

        // `pos` sits on a lead byte, so it is a char boundary
        let c = input
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        if !is_token_rune(c) {
            return Some(pos);
        }
        pos += c.len_utf8();
    }

    None
}

pub(crate) fn find_non_token_bytes(input: &[u8]) -> Option<usize> {
    let mut pos = 0;

    while let Some(&b) = input.get(pos) {
        if b.is_ascii() {
            if !is_token_byte(b) {
                return Some(pos);
            }
            pos += 1;
            continue;
        }

        let (c, width) = decode_rune(input.get(pos..).unwrap_or_default());
        if !is_token_rune(c) {
            return Some(pos);
        }
        pos += width;
    }

    None
}

/// Decode the first code point of `bytes`.
/// Returns (U+FFFD, 1) for a malformed sequence, like Go's `utf8.DecodeRune`.
fn decode_rune(bytes: &[u8]) -> (char, usize) {
    bytes
        .utf8_chunks()
        .next()
        .and_then(|chunk| chunk.valid().chars().next())
        .map_or((char::REPLACEMENT_CHARACTER, 1), |c| (c, c.len_utf8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_token_rune() {
        assert!(is_token_rune('a'));
        assert!(is_token_rune('Z'));
        assert!(is_token_rune('7'));
        assert!(is_token_rune('~'));
        assert!(is_token_rune('`'));

        assert!(!is_token_rune(' '));
        assert!(!is_token_rune(':'));
        assert!(!is_token_rune('\0'));
        assert!(!is_token_rune('\u{7f}'));
        assert!(!is_token_rune('é'));
        assert!(!is_token_rune(char::REPLACEMENT_CHARACTER));
        assert!(!is_token_rune(char::MAX));
    }

    #[test]
    fn test_valid_header_field_name() {
        assert!(valid_header_field_name("Content-Length"));
        assert!(valid_header_field_name("content-length"));
        assert!(valid_header_field_name("X-Custom-Header"));
        assert!(valid_header_field_name("!#$%&'*+-.^_`|~"));

        assert!(!valid_header_field_name(""));
        assert!(!valid_header_field_name("Invalid Header"));
        assert!(!valid_header_field_name("Héader"));
        assert!(!valid_header_field_name("Host:"));
        assert!(!valid_header_field_name("X-Trailing\r\n"));
    }

    #[test]
    fn test_valid_header_field_name_bytes() {
        assert!(valid_header_field_name_bytes(b"Cookie"));

        assert!(!valid_header_field_name_bytes(b""));
        assert!(!valid_header_field_name_bytes(b"Cook\xFFie"));
        assert!(!valid_header_field_name_bytes(b"\xC3"));
        assert!(!valid_header_field_name_bytes(b"Host\xC3\xA9"));
        // Overlong encoding of '/'
        assert!(!valid_header_field_name_bytes(b"\xC0\xAF"));
    }

    #[test]
    fn test_find_non_token() {
        assert_eq!(find_non_token(""), None);
        assert_eq!(find_non_token("Accept"), None);
        assert_eq!(find_non_token("Invalid Header"), Some(7));
        assert_eq!(find_non_token("Héader"), Some(1));
        assert_eq!(find_non_token("ab\u{1F600}"), Some(2));
    }

    #[test]
    fn test_find_non_token_bytes() {
        assert_eq!(find_non_token_bytes(b"Accept"), None);
        assert_eq!(find_non_token_bytes(b"Acc\x80ept"), Some(3));
        assert_eq!(find_non_token_bytes(b"Acc ept"), Some(3));
    }

    #[test]
    fn test_decode_rune() {
        assert_eq!(decode_rune("é".as_bytes()), ('é', 2));
        assert_eq!(decode_rune("\u{1F600}x".as_bytes()), ('\u{1F600}', 4));
        assert_eq!(decode_rune(b"\xE2\x82"), (char::REPLACEMENT_CHARACTER, 1));
        assert_eq!(decode_rune(b""), (char::REPLACEMENT_CHARACTER, 1));
    }
}
