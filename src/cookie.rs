use crate::checkers::{valid_header_field_name, valid_header_field_name_bytes};

/// Check if a string can be used as a cookie name.
/// Cookie names use the `token` grammar unchanged (RFC 6265 section 4.1.1).
#[inline]
pub fn is_cookie_name_valid(raw: &str) -> bool {
    valid_header_field_name(raw)
}

/// Check if raw bytes can be used as a cookie name
#[inline]
pub fn is_cookie_name_valid_bytes(raw: &[u8]) -> bool {
    valid_header_field_name_bytes(raw)
}
