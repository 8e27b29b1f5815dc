//! Encoding and decoding definitions for Symbol implementations.
//!
//! Every alphabet maps the 256 possible input bytes onto its symbols with a dense table, and maps
//! its valid symbols back onto canonical uppercase letters. Tables are built at compile time from
//! the canonical letters of an alphabet, so the two directions cannot drift apart.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};

use crate::errors::{Result, SymbolError};

pub trait Symbol:
    std::marker::Sized
    + Copy
    + Clone
    + Send
    + Sync
    + std::fmt::Debug
    + std::cmp::PartialEq
    + std::cmp::Eq
    + std::hash::Hash
    + std::fmt::Display
    + 'static
{
    /// Name of the alphabet, e.g. "DNA".
    const NAME: &'static str;

    /// Number of valid symbols in the alphabet.
    const SIZE: usize;

    /// The symbol representing an alignment gap.
    const GAP: Self;

    /// Out-of-band sentinel for bytes that are not part of the alphabet.
    const INVALID: Self;

    /// Translate a byte into a symbol.
    ///
    /// Total over all bytes: anything that is not a letter of the alphabet decodes to
    /// `Self::INVALID`.
    fn decode(byte: u8) -> Self;

    /// Translate a valid symbol into its canonical uppercase letter.
    ///
    /// # Panics
    ///
    /// Panics with an `InvalidSymbol` message when called on `Self::INVALID`.
    fn encode(self) -> u8;

    /// Position of the symbol in the alphabet.
    fn index(self) -> usize;

    /// All valid symbols in encoding order.
    fn alphabet() -> &'static [Self];

    fn is_valid(self) -> bool {
        self.index() < Self::SIZE
    }

    /// Panic with an `InvalidSymbol` message unless the symbol is valid.
    #[track_caller]
    fn require_valid(self) {
        if !self.is_valid() {
            panic!("{}", invalid_symbol(self));
        }
    }

    fn try_decode(byte: u8) -> Result<Self> {
        let symbol = Self::decode(byte);
        if symbol.is_valid() {
            Ok(symbol)
        } else {
            Err(SymbolError::InvalidSymbol(format!(
                "byte {byte:#04x} is not a {} symbol",
                Self::NAME
            )))
        }
    }

    fn try_encode(self) -> Result<u8> {
        if self.is_valid() {
            Ok(self.encode())
        } else {
            Err(invalid_symbol(self))
        }
    }
}

fn invalid_symbol<S: Symbol>(symbol: S) -> SymbolError {
    SymbolError::InvalidSymbol(format!("{:?} is not a valid {} symbol", symbol, S::NAME))
}

/// Build the dense byte to symbol table of an alphabet.
///
/// `letters[i]` is the canonical letter of `symbols[i]`. Both cases of a letter map to the same
/// symbol, every other byte maps to `invalid`.
pub(crate) const fn build_decode_table<S: Copy, const N: usize>(
    letters: &[u8; N],
    symbols: &[S; N],
    invalid: S,
) -> [S; 256] {
    let mut table = [invalid; 256];
    let mut i = 0;
    while i < N {
        table[letters[i].to_ascii_uppercase() as usize] = symbols[i];
        table[letters[i].to_ascii_lowercase() as usize] = symbols[i];
        i += 1;
    }
    table
}

/// Deserialize a symbol from a single letter.
pub(crate) struct SymbolVisitor<S>(PhantomData<S>);

impl<S> SymbolVisitor<S> {
    pub(crate) fn new() -> Self {
        SymbolVisitor(PhantomData)
    }
}

impl<'de, S: Symbol> Visitor<'de> for SymbolVisitor<S> {
    type Value = S;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a single {} letter", S::NAME)
    }

    fn visit_char<E: de::Error>(self, value: char) -> std::result::Result<S, E> {
        let byte = u8::try_from(value)
            .map_err(|_| E::custom(format!("{value:?} is not a {} letter", S::NAME)))?;
        S::try_decode(byte).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<S, E> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.visit_char(letter),
            _ => Err(E::invalid_length(value.chars().count(), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_table_folds_case() {
        let table = build_decode_table(b"AC-", &[1u8, 2, 3], 0);
        assert_eq!(table[b'A' as usize], 1);
        assert_eq!(table[b'a' as usize], 1);
        assert_eq!(table[b'C' as usize], 2);
        assert_eq!(table[b'c' as usize], 2);
        assert_eq!(table[b'-' as usize], 3);
    }

    #[test]
    fn decode_table_defaults_to_invalid() {
        let table = build_decode_table(b"AC-", &[1u8, 2, 3], 0);
        let mapped = table.iter().filter(|&&symbol| symbol != 0).count();
        assert_eq!(mapped, 5);
        assert_eq!(table[b'G' as usize], 0);
        assert_eq!(table[b' ' as usize], 0);
        assert_eq!(table[0xff], 0);
    }
}
