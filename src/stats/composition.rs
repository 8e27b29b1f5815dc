use derive_more::{Add, AddAssign};
use serde::{Deserialize, Serialize};

use crate::core::NucleicAcid;
use crate::encoding::Symbol;

/// Tally of symbol classes.
///
/// Tallies are additive, so partial tallies (e.g. of single lines) can be merged with `+` or `+=`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Add, AddAssign)]
pub struct Composition {
    /// Number of symbols seen, including invalid ones.
    pub length: usize,
    pub invalid: usize,
    pub gaps: usize,
    pub certain: usize,
    pub ambiguous: usize,
    /// Symbols that are surely G or C.
    pub gc: usize,
    pub purines: usize,
    pub pyrimidines: usize,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a nucleotide in every class it belongs to.
    pub fn add_nucleotide<S: NucleicAcid>(&mut self, symbol: S) {
        self.length += 1;
        if !symbol.is_valid() {
            self.invalid += 1;
            return;
        }
        self.gaps += symbol.is_gap() as usize;
        self.certain += symbol.is_certain() as usize;
        self.ambiguous += symbol.is_ambiguous() as usize;
        self.gc += symbol.is_gc() as usize;
        self.purines += symbol.is_purine() as usize;
        self.pyrimidines += symbol.is_pyrimidine() as usize;
    }

    /// Count a symbol of an alphabet without bit semantics.
    ///
    /// Only the length, invalid and gap counts are maintained.
    pub fn add_residue<S: Symbol>(&mut self, symbol: S) {
        self.length += 1;
        if !symbol.is_valid() {
            self.invalid += 1;
        } else if symbol == S::GAP {
            self.gaps += 1;
        }
    }

    /// Fraction of valid, non-gap symbols that are surely G or C.
    pub fn gc_content(&self) -> Option<f64> {
        let bases = self.length.checked_sub(self.invalid)?.checked_sub(self.gaps)?;
        match bases {
            0 => None,
            _ => Some(self.gc as f64 / bases as f64),
        }
    }
}

/// Trait extension to compute the composition of decoded nucleotides
pub trait NucleotideComposition {
    fn composition(&self) -> Composition;
}

impl<S: NucleicAcid> NucleotideComposition for [S] {
    fn composition(&self) -> Composition {
        let mut composition = Composition::new();
        for &symbol in self {
            composition.add_nucleotide(symbol);
        }
        composition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AminoAcid, Dna, Rna};

    fn decode<S: Symbol>(text: &[u8]) -> Vec<S> {
        text.iter().map(|&byte| S::decode(byte)).collect()
    }

    #[test]
    fn tally_nucleotides() {
        let composition = decode::<Dna>(b"ACGTRN-U").composition();
        assert_eq!(
            composition,
            Composition {
                length: 8,
                invalid: 1,
                gaps: 1,
                certain: 4,
                ambiguous: 2,
                gc: 2,
                purines: 3,
                pyrimidines: 2,
            }
        );
    }

    #[test]
    fn tally_rna() {
        let composition = decode::<Rna>(b"GGUT").composition();
        assert_eq!(composition.length, 4);
        assert_eq!(composition.invalid, 1);
        assert_eq!(composition.pyrimidines, 1);
        assert_eq!(composition.gc, 2);
    }

    #[test]
    fn merge_tallies() {
        let mut total = decode::<Dna>(b"GC").composition();
        total += decode::<Dna>(b"AT").composition();
        assert_eq!(total, decode::<Dna>(b"GCAT").composition());
        assert_eq!(total.gc_content(), Some(0.5));
        assert_eq!(
            decode::<Dna>(b"G").composition() + decode::<Dna>(b"-").composition(),
            decode::<Dna>(b"G-").composition()
        );
    }

    #[test]
    fn gc_content_without_bases() {
        assert_eq!(Composition::new().gc_content(), None);
        assert_eq!(decode::<Dna>(b"--xx").composition().gc_content(), None);
    }

    #[test]
    fn gc_content_of_inconsistent_tally() {
        let composition: Composition = serde_yaml::from_str(
            "{length: 1, invalid: 1, gaps: 1, certain: 0, ambiguous: 0, gc: 0, purines: 0, pyrimidines: 0}",
        )
        .unwrap();
        assert_eq!(composition.gc_content(), None);

        let composition = Composition {
            length: 2,
            gaps: 3,
            ..Composition::default()
        };
        assert_eq!(composition.gc_content(), None);
    }

    #[test]
    fn tally_residues() {
        let mut composition = Composition::new();
        for symbol in decode::<AminoAcid>(b"MK-*1") {
            composition.add_residue(symbol);
        }
        assert_eq!(composition.length, 5);
        assert_eq!(composition.gaps, 1);
        assert_eq!(composition.invalid, 1);
        assert_eq!(composition.gc, 0);
    }
}
