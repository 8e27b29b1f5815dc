//! Statistics over decoded symbols

pub mod composition;

pub use composition::{Composition, NucleotideComposition};
