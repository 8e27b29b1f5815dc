//! RNA alphabet.

use super::nucleic::NucleicAcid;
use crate::encoding::Symbol;

nucleic_acid! {
    /// The full gamut of symbols for the RNA alphabet.
    Rna {
        name: "RNA",
        fourth: U,
        letters: b"-ACMGRSVUWYHKDBN",
        decode: RNA_DECODE,
    }
}

impl From<super::Dna> for Rna {
    fn from(dna: super::Dna) -> Self {
        Rna::from_bits(dna.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dna;

    #[test]
    fn decode_letters() {
        assert_eq!(Rna::decode(b'U'), Rna::U);
        assert_eq!(Rna::decode(b'u'), Rna::U);
        assert_eq!(Rna::decode(b'y'), Rna::Y);
        assert_eq!(Rna::decode(b'-'), Rna::Gap);
    }

    #[test]
    fn decode_rejects_thymine() {
        assert_eq!(Rna::decode(b'T'), Rna::Invalid);
        assert_eq!(Rna::decode(b't'), Rna::Invalid);
    }

    #[test]
    fn decode_rejects_foreign_bytes() {
        for byte in [b'X', b'.', b' ', b'\n', b'\t', b'0', b'9', 0x00, 0xff] {
            assert_eq!(Rna::decode(byte), Rna::Invalid, "byte {byte:#04x}");
        }
    }

    #[test]
    fn decode_table_covers_letters_only() {
        let valid = RNA_DECODE
            .iter()
            .filter(|&&symbol| symbol != Rna::Invalid)
            .count();
        // 15 letters in both cases plus the gap
        assert_eq!(valid, 31);
    }

    #[test]
    fn encode_decode() {
        for &symbol in Rna::alphabet() {
            assert_eq!(Rna::decode(symbol.encode()), symbol);
        }
        for &letter in b"-ACMGRSVUWYHKDBN" {
            assert_eq!(Rna::decode(letter).encode(), letter);
        }
    }

    #[test]
    fn shares_bits_with_dna() {
        for (&rna, &dna) in Rna::alphabet().iter().zip(Dna::alphabet()) {
            assert_eq!(rna.bits(), dna.bits());
            assert_eq!(Rna::from(dna), rna);
        }
        assert_eq!(Rna::U.encode(), b'U');
        assert_eq!(Rna::from(Dna::T), Rna::U);
    }

    #[test]
    fn try_from_bits() {
        assert_eq!(Rna::try_from(0b1010u8), Ok(Rna::Y));
        assert!(Rna::try_from(0b10000u8).is_err());
    }
}
