//! DNA alphabet.

use super::nucleic::NucleicAcid;
use crate::encoding::Symbol;

nucleic_acid! {
    /// The full gamut of symbols for the DNA nucleotide alphabet.
    Dna {
        name: "DNA",
        fourth: T,
        letters: b"-ACMGRSVTWYHKDBN",
        decode: DNA_DECODE,
    }
}

impl From<super::Rna> for Dna {
    fn from(rna: super::Rna) -> Self {
        Dna::from_bits(rna.bits())
    }
}
