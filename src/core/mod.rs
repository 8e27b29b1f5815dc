//! This module contains the symbol alphabets of the library.

#[macro_use]
pub mod nucleic;

mod amino;
mod dna;
mod rna;

pub use amino::{AminoAcid, AMINO_ACID_DECODE};
pub use dna::{Dna, DNA_DECODE};
pub use nucleic::NucleicAcid;
pub use rna::{Rna, RNA_DECODE};
