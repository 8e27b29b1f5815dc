//! Bit-packed IUPAC symbol alphabets.
//!
//! DNA and RNA symbols are 4-bit patterns of possible bases, so ambiguity codes, complements and
//! compatibility tests reduce to bit operations:
//!
//! ```
//! use biosymbols::{Dna, NucleicAcid, Symbol};
//!
//! let r = Dna::decode(b'r');
//! assert_eq!(r, Dna::A | Dna::G);
//! assert_eq!(r.complement(), Dna::Y);
//! assert!(r.is_purine());
//! assert!(r.is_compatible(Dna::A));
//! assert_eq!(Dna::decode(b'U'), Dna::Invalid);
//! assert_eq!(Dna::N.encode(), b'N');
//! ```

pub mod args;
pub mod core;
pub mod encoding;
pub mod errors;
pub mod runner;
pub mod stats;

pub use crate::core::{AminoAcid, Dna, NucleicAcid, Rna};
pub use crate::encoding::Symbol;
pub use crate::errors::SymbolError;
