#![cfg_attr(not(feature = "std"), no_std)]

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod cookie;
mod error;
mod token;

// Public API
pub use character_sets::{TOKEN_TABLE, is_token_byte};
pub use checkers::{
    find_non_token, is_token_rune, valid_header_field_name, valid_header_field_name_bytes,
};
pub use cookie::{is_cookie_name_valid, is_cookie_name_valid_bytes};
pub use error::{InvalidToken, Result};
pub use token::Token;
