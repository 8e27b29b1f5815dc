//! Amino acid alphabet.
//!
//! Amino acids are plain enumerations without bit semantics. They share the table based
//! translation of the nucleic acids but none of their algebra.

use biosymbols_macros::require_valid;

use crate::encoding::{build_decode_table, Symbol, SymbolVisitor};

/// The full gamut of symbols for the amino acid alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AminoAcid {
    A,
    R,
    N,
    D,
    C,
    Q,
    E,
    G,
    H,
    I,
    L,
    K,
    M,
    F,
    P,
    S,
    T,
    W,
    Y,
    V,
    /// Pyrrolysine
    O,
    /// Selenocysteine
    U,
    /// Aspartic acid or asparagine
    B,
    /// Leucine or isoleucine
    J,
    /// Glutamine or glutamic acid
    Z,
    /// Any amino acid
    X,
    /// Termination codon
    Term,
    Gap,
    Invalid,
}

impl AminoAcid {
    /// All valid symbols in encoding order.
    pub const ALL: [AminoAcid; 28] = [
        AminoAcid::A,
        AminoAcid::R,
        AminoAcid::N,
        AminoAcid::D,
        AminoAcid::C,
        AminoAcid::Q,
        AminoAcid::E,
        AminoAcid::G,
        AminoAcid::H,
        AminoAcid::I,
        AminoAcid::L,
        AminoAcid::K,
        AminoAcid::M,
        AminoAcid::F,
        AminoAcid::P,
        AminoAcid::S,
        AminoAcid::T,
        AminoAcid::W,
        AminoAcid::Y,
        AminoAcid::V,
        AminoAcid::O,
        AminoAcid::U,
        AminoAcid::B,
        AminoAcid::J,
        AminoAcid::Z,
        AminoAcid::X,
        AminoAcid::Term,
        AminoAcid::Gap,
    ];

    pub const LETTERS: [u8; 28] = *b"ARNDCQEGHILKMFPSTWYVOUBJZX*-";
}

/// Byte to amino acid lookup table.
pub static AMINO_ACID_DECODE: [AminoAcid; 256] =
    build_decode_table(&AminoAcid::LETTERS, &AminoAcid::ALL, AminoAcid::Invalid);

impl Symbol for AminoAcid {
    const NAME: &'static str = "amino acid";
    const SIZE: usize = 28;
    const GAP: Self = AminoAcid::Gap;
    const INVALID: Self = AminoAcid::Invalid;

    #[inline]
    fn decode(byte: u8) -> Self {
        AMINO_ACID_DECODE[byte as usize]
    }

    #[require_valid]
    fn encode(self) -> u8 {
        AminoAcid::LETTERS[self.index()]
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn alphabet() -> &'static [Self] {
        &AminoAcid::ALL
    }
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.try_encode() {
            Ok(letter) => write!(f, "{}", letter as char),
            Err(_) => write!(f, "?"),
        }
    }
}

impl serde::Serialize for AminoAcid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let letter = self
            .try_encode()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_char(letter as char)
    }
}

impl<'de> serde::Deserialize<'de> for AminoAcid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_char(SymbolVisitor::<Self>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_letters() {
        assert_eq!(AminoAcid::decode(b'W'), AminoAcid::W);
        assert_eq!(AminoAcid::decode(b'w'), AminoAcid::W);
        assert_eq!(AminoAcid::decode(b'*'), AminoAcid::Term);
        assert_eq!(AminoAcid::decode(b'-'), AminoAcid::Gap);
        assert_eq!(AminoAcid::decode(b'1'), AminoAcid::Invalid);
        assert_eq!(AminoAcid::decode(b' '), AminoAcid::Invalid);
    }

    #[test]
    fn encode_decode() {
        for &symbol in AminoAcid::alphabet() {
            assert_eq!(AminoAcid::decode(symbol.encode()), symbol);
        }
        assert_eq!(AminoAcid::alphabet().len(), AminoAcid::SIZE);
    }

    #[test]
    fn decode_table_covers_letters_only() {
        let valid = AMINO_ACID_DECODE
            .iter()
            .filter(|&&symbol| symbol.is_valid())
            .count();
        // 26 letters in both cases plus the terminator and the gap
        assert_eq!(valid, 54);
    }

    #[test]
    #[should_panic(expected = "InvalidSymbol")]
    fn encode_invalid_panics() {
        let _ = AminoAcid::Invalid.encode();
    }

    #[test]
    fn serde_letters() {
        let peptide = vec![AminoAcid::K, AminoAcid::I, AminoAcid::T, AminoAcid::Term];
        let yaml = serde_yaml::to_string(&peptide).unwrap();
        let parsed: Vec<AminoAcid> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, peptide);
    }
}
