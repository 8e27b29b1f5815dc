//! All errors that can occur in the biosymbols library.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolError {
    /// A value outside the alphabet was used where a valid symbol is required.
    InvalidSymbol(String),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolError::InvalidSymbol(message) => write!(f, "InvalidSymbol: {}", message),
        }
    }
}

impl std::error::Error for SymbolError {}

pub type Result<T> = std::result::Result<T, SymbolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_error_kind() {
        let error = SymbolError::InvalidSymbol("byte 0x55 is not a DNA symbol".to_string());
        assert_eq!(
            error.to_string(),
            "InvalidSymbol: byte 0x55 is not a DNA symbol"
        );
    }
}
