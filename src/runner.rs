use anyhow::{Result, bail};
use itertools::Itertools;
use serde::Serialize;
use std::fs;
use std::io;

use crate::args::{AlphabetArg, Args};
use crate::core::{AminoAcid, Dna, NucleicAcid, Rna};
use crate::encoding::Symbol;
use crate::stats::{Composition, NucleotideComposition};

/// Summary of an inspected sequence.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub alphabet: &'static str,
    pub composition: Composition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

pub struct Runner {
    args: Args,
    text: Vec<u8>,
}

impl Runner {
    pub fn new(args: Args) -> Result<Runner> {
        Self::setup_logger(&args)?;
        let text = Self::load_text(&args)?;
        Ok(Self { args, text })
    }

    pub fn start(&self) -> Result<()> {
        let report = Self::inspect(&self.args, &self.text)?;
        serde_yaml::to_writer(io::stdout().lock(), &report)?;
        log::info!("Finished inspection.");
        Ok(())
    }

    /// Decode `text` with the alphabet selected in `args` and summarize it.
    pub fn inspect(args: &Args, text: &[u8]) -> Result<Report> {
        match args.alphabet {
            AlphabetArg::Dna => Self::inspect_nucleotides::<Dna>(args, text),
            AlphabetArg::Rna => Self::inspect_nucleotides::<Rna>(args, text),
            AlphabetArg::Protein => Self::inspect_residues::<AminoAcid>(args, text),
        }
    }

    /// Setup logging level and target
    fn setup_logger(args: &Args) -> Result<()> {
        let log_level = match args.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        match &args.log_file {
            Some(path) => simple_logging::log_to_file(path, log_level)?,
            None => simple_logging::log_to_stderr(log_level),
        }
        Ok(())
    }

    /// Load sequence letters from the command line or from a file
    fn load_text(args: &Args) -> Result<Vec<u8>> {
        let raw = match (&args.sequence, &args.input) {
            (Some(sequence), _) => sequence.as_bytes().to_vec(),
            (None, Some(path)) => {
                log::info!("Reading sequence from {}...", path);
                fs::read(path)?
            }
            (None, None) => bail!("No sequence given."),
        };
        Ok(raw)
    }

    fn decode<S: Symbol>(line: &[u8], strict: bool) -> Result<Vec<S>> {
        let symbols = line
            .iter()
            .filter(|byte| !byte.is_ascii_whitespace())
            .map(|&byte| {
                if strict {
                    S::try_decode(byte)
                } else {
                    Ok(S::decode(byte))
                }
            })
            .collect::<crate::errors::Result<Vec<S>>>()?;
        Ok(symbols)
    }

    fn inspect_nucleotides<S: NucleicAcid>(args: &Args, text: &[u8]) -> Result<Report> {
        log::info!("Decoding {} bytes as {}...", text.len(), S::NAME);

        let mut composition = Composition::new();
        let mut complement: Vec<S> = Vec::new();
        for (line_number, line) in text.split(|&byte| byte == b'\n').enumerate() {
            let symbols = Self::decode::<S>(line, args.strict)?;
            let line_composition = symbols.composition();
            log::debug!("line={line_number} composition={line_composition:?}");
            composition += line_composition;

            if args.complement {
                // invalid bytes are kept and shown as '?'
                complement.extend(symbols.iter().map(|&symbol| {
                    if symbol.is_valid() {
                        symbol.complement()
                    } else {
                        symbol
                    }
                }));
            }
        }
        Self::warn_invalid::<S>(&composition);

        Ok(Report {
            alphabet: S::NAME,
            composition,
            gc_content: composition.gc_content(),
            complement: args
                .complement
                .then(|| complement.iter().map(|symbol| symbol.to_string()).join("")),
        })
    }

    fn inspect_residues<S: Symbol>(args: &Args, text: &[u8]) -> Result<Report> {
        if args.complement {
            bail!("The complement is undefined for the {} alphabet.", S::NAME);
        }
        log::info!("Decoding {} bytes as {}...", text.len(), S::NAME);

        let mut composition = Composition::new();
        for symbol in Self::decode::<S>(text, args.strict)? {
            composition.add_residue(symbol);
        }
        Self::warn_invalid::<S>(&composition);

        Ok(Report {
            alphabet: S::NAME,
            composition,
            gc_content: None,
            complement: None,
        })
    }

    fn warn_invalid<S: Symbol>(composition: &Composition) {
        if composition.invalid > 0 {
            log::warn!(
                "{} of {} bytes are not {} symbols.",
                composition.invalid,
                composition.length,
                S::NAME
            );
        }
    }
}
