use std::fmt;

/// Reason a string was rejected as a `#RRGGBB` / `#RRGGBBAA` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// The string does not start with `#`.
    MissingHash,
    /// The body after `#` is not 6 or 8 characters long.
    InvalidLength(usize),
    /// The body contains a non-hex character.
    InvalidDigit(char),
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexColorError::MissingHash => write!(f, "hex color must start with '#'"),
            HexColorError::InvalidLength(n) => {
                write!(f, "hex color must be #rrggbb or #rrggbbaa, got {n} digits")
            }
            HexColorError::InvalidDigit(c) => write!(f, "invalid hex digit {c:?} in color"),
        }
    }
}

impl std::error::Error for HexColorError {}
