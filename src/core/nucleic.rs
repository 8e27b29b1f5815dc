//! Bit algebra of the nucleic acid alphabets.
//!
//! DNA and RNA symbols are stored as 4-bit patterns where every bit marks one possible base:
//!
//! - bit 0: adenine
//! - bit 1: cytosine
//! - bit 2: guanine
//! - bit 3: thymine (DNA) or uracil (RNA)
//!
//! The gap is `0b0000` and each of the 15 nonzero patterns is exactly one IUPAC code, so an
//! ambiguity code is the union of the bases it stands for (`R == A | G`) and the complement is a
//! fixed permutation of the bits. Values above `0b1111` are out of band and only used for the
//! `Invalid` sentinel.
//!
//! Every operation of [`NucleicAcid`] requires valid operands and panics with an `InvalidSymbol`
//! message otherwise. Use [`Symbol::is_valid`] or the `try_*` conversions at the boundary.
//!
//! Amino acids carry no bit semantics and do not implement the trait:
//!
//! ```compile_fail
//! use biosymbols::{AminoAcid, NucleicAcid};
//!
//! let _ = AminoAcid::A.complement();
//! ```
//!
//! DNA and RNA symbols cannot be mixed in one operation:
//!
//! ```compile_fail
//! use biosymbols::{Dna, NucleicAcid, Rna};
//!
//! let _ = Dna::A.is_compatible(Rna::A);
//! ```

use std::ops::{BitAnd, BitOr, Not};

use biosymbols_macros::require_valid;

use crate::encoding::Symbol;

pub trait NucleicAcid:
    Symbol + BitAnd<Output = Self> + BitOr<Output = Self> + Not<Output = Self>
{
    /// Weak bases, A or T/U.
    const WEAK: Self;

    /// Purines, A or G.
    const PURINE: Self;

    /// Pyrimidines, C or T/U.
    const PYRIMIDINE: Self;

    /// Raw integer representation of the symbol.
    fn bits(self) -> u8;

    /// Reinterpret raw bits as a symbol; anything above `0b1111` becomes the invalid sentinel.
    fn from_bits(bits: u8) -> Self;

    /// Check a raw integer before it is reinterpreted as a symbol.
    fn is_valid_bits(bits: u8) -> bool {
        bits <= 0b1111
    }

    /// Number of bases the symbol may stand for.
    #[require_valid]
    fn count_ones(self) -> u32 {
        self.bits().count_ones()
    }

    /// Test if the symbol is surely either guanine or cytosine.
    #[require_valid]
    fn is_gc(self) -> bool {
        self != Self::GAP && (self & Self::WEAK) == Self::GAP
    }

    /// Test if the symbol is surely a purine.
    #[require_valid]
    fn is_purine(self) -> bool {
        self != Self::GAP && (self & Self::PYRIMIDINE) == Self::GAP
    }

    /// Test if the symbol is surely a pyrimidine.
    #[require_valid]
    fn is_pyrimidine(self) -> bool {
        self != Self::GAP && (self & Self::PURINE) == Self::GAP
    }

    /// Test if the symbol represents an ambiguity code.
    #[require_valid]
    fn is_ambiguous(self) -> bool {
        self.count_ones() > 1
    }

    /// Test if the symbol represents a certainly known base.
    #[require_valid]
    fn is_certain(self) -> bool {
        self.count_ones() == 1
    }

    #[require_valid]
    fn is_gap(self) -> bool {
        self == Self::GAP
    }

    /// Biological complement, A <-> T/U and C <-> G applied to every possible base.
    #[require_valid]
    fn complement(self) -> Self {
        let bits = self.bits();
        Self::from_bits(
            (bits & 0b0001) << 3
                | (bits & 0b1000) >> 3
                | (bits & 0b0010) << 1
                | (bits & 0b0100) >> 1,
        )
    }

    /// Test if `self` and `other` are compatible with each other (i.e. they can be the same
    /// base).
    ///
    /// The gap stands for no base at all and is not compatible with anything, not even itself.
    #[require_valid]
    fn is_compatible(self, other: Self) -> bool {
        (self.bits() & other.bits()) != 0
    }
}

/// Define a nucleic acid alphabet.
///
/// The alphabets only differ in their name, the name of the fourth base and its letter.
macro_rules! nucleic_acid {
    (
        $(#[$meta:meta])*
        $name:ident {
            name: $label:expr,
            fourth: $fourth:ident,
            letters: $letters:expr,
            decode: $decode:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            Gap = 0b0000,
            A = 0b0001,
            C = 0b0010,
            M = 0b0011,
            G = 0b0100,
            R = 0b0101,
            S = 0b0110,
            V = 0b0111,
            $fourth = 0b1000,
            W = 0b1001,
            Y = 0b1010,
            H = 0b1011,
            K = 0b1100,
            D = 0b1101,
            B = 0b1110,
            N = 0b1111,
            Invalid = 0b10000,
        }

        impl $name {
            /// All valid symbols, indexed by their bits.
            pub const ALL: [$name; 16] = [
                $name::Gap,
                $name::A,
                $name::C,
                $name::M,
                $name::G,
                $name::R,
                $name::S,
                $name::V,
                $name::$fourth,
                $name::W,
                $name::Y,
                $name::H,
                $name::K,
                $name::D,
                $name::B,
                $name::N,
            ];

            /// Canonical letters, indexed by bits.
            pub const LETTERS: [u8; 16] = *$letters;
        }

        /// Byte to symbol lookup table.
        pub static $decode: [$name; 256] =
            $crate::encoding::build_decode_table(&$name::LETTERS, &$name::ALL, $name::Invalid);

        impl $crate::encoding::Symbol for $name {
            const NAME: &'static str = $label;
            const SIZE: usize = 16;
            const GAP: Self = $name::Gap;
            const INVALID: Self = $name::Invalid;

            #[inline]
            fn decode(byte: u8) -> Self {
                $decode[byte as usize]
            }

            #[::biosymbols_macros::require_valid]
            fn encode(self) -> u8 {
                $name::LETTERS[self.index()]
            }

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            fn alphabet() -> &'static [Self] {
                &$name::ALL
            }
        }

        impl $crate::core::nucleic::NucleicAcid for $name {
            const WEAK: Self = $name::W;
            const PURINE: Self = $name::R;
            const PYRIMIDINE: Self = $name::Y;

            #[inline]
            fn bits(self) -> u8 {
                self as u8
            }

            fn from_bits(bits: u8) -> Self {
                if Self::is_valid_bits(bits) {
                    $name::ALL[bits as usize]
                } else {
                    $name::Invalid
                }
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            #[::biosymbols_macros::require_valid]
            fn bitand(self, rhs: Self) -> Self {
                Self::from_bits(self.bits() & rhs.bits())
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            #[::biosymbols_macros::require_valid]
            fn bitor(self, rhs: Self) -> Self {
                Self::from_bits(self.bits() | rhs.bits())
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            /// All bases except those of `self`, restricted to the 4-bit universe.
            #[::biosymbols_macros::require_valid]
            fn not(self) -> Self {
                Self::from_bits(!self.bits() & 0b1111)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::errors::SymbolError;

            fn try_from(bits: u8) -> std::result::Result<Self, Self::Error> {
                if Self::is_valid_bits(bits) {
                    Ok(Self::from_bits(bits))
                } else {
                    Err($crate::errors::SymbolError::InvalidSymbol(format!(
                        "{bits:#07b} is not a valid {} bit pattern",
                        $label
                    )))
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match self.try_encode() {
                    Ok(letter) => write!(f, "{}", letter as char),
                    Err(_) => write!(f, "?"),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<Ser: serde::Serializer>(
                &self,
                serializer: Ser,
            ) -> std::result::Result<Ser::Ok, Ser::Error> {
                let letter = self
                    .try_encode()
                    .map_err(<Ser::Error as serde::ser::Error>::custom)?;
                serializer.serialize_char(letter as char)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<De: serde::Deserializer<'de>>(
                deserializer: De,
            ) -> std::result::Result<Self, De::Error> {
                deserializer.deserialize_char($crate::encoding::SymbolVisitor::<Self>::new())
            }
        }
    };
}
