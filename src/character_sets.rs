/// Token character classification (RFC 7230 section 3.2.6)
///
/// ```text
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*"
///       / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
///       / DIGIT / ALPHA
/// ```
pub const TOKEN_PUNCTUATION: &[u8; 15] = b"!#$%&'*+-.^_`|~";

/// Membership table over the ASCII range: `true` iff the byte is a `tchar`
pub const TOKEN_TABLE: [bool; 128] = {
    let mut table = [false; 128];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }

    let mut i = 0;
    while i < TOKEN_PUNCTUATION.len() {
        table[TOKEN_PUNCTUATION[i] as usize] = true;
        i += 1;
    }

    table
};

/// Check if a byte is a `tchar`.
/// Bytes outside the ASCII range are never token characters.
#[inline]
pub const fn is_token_byte(b: u8) -> bool {
    b.is_ascii() && TOKEN_TABLE[b as usize]
}
