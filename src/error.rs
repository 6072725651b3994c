/// Reasons a string is not an HTTP token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidToken {
    /// Tokens must contain at least one character
    Empty,
    /// A character outside the `tchar` set
    InvalidCharacter {
        /// Byte offset of the character in the input
        position: usize,
        character: char,
    },
}

impl core::fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty token"),
            Self::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "Invalid token character {character:?} at byte {position}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidToken {}

/// Result type for token validation
pub type Result<T> = core::result::Result<T, InvalidToken>;
