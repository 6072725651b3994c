use crate::checkers::find_non_token;
use crate::error::{InvalidToken, Result};

/// A string slice known to be a valid HTTP token.
///
/// The input is borrowed as-is: no case folding or normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    /// Validate `input` against the `token` grammar
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToken::Empty`] for empty input, or
    /// [`InvalidToken::InvalidCharacter`] pointing at the first non-`tchar`.
    pub fn new(input: &'a str) -> Result<Self> {
        if input.is_empty() {
            return Err(InvalidToken::Empty);
        }
        match find_non_token(input) {
            None => Ok(Self(input)),
            Some(position) => Err(InvalidToken::InvalidCharacter {
                position,
                character: input
                    .get(position..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            }),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl core::ops::Deref for Token<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl AsRef<[u8]> for Token<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl<'a> TryFrom<&'a str> for Token<'a> {
    type Error = InvalidToken;

    fn try_from(value: &'a str) -> Result<Self> {
        Self::new(value)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
