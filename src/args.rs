use clap::{ArgAction, Parser, ValueEnum};

/// Alphabet used to decode the input.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetArg {
    Dna,
    Rna,
    Protein,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "biosymbols")]
pub struct Args {
    /// Sequence letters to inspect.
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Path to a plain text file with sequence letters (whitespace is ignored).
    #[arg(long, short)]
    pub input: Option<String>,

    /// Alphabet used to decode the sequence.
    #[arg(long, short, value_enum, default_value_t = AlphabetArg::Dna)]
    pub alphabet: AlphabetArg,

    /// Report the complement of the sequence.
    #[arg(long, short)]
    pub complement: bool,

    /// Fail on the first byte that is not a letter of the alphabet.
    #[arg(long)]
    pub strict: bool,

    /// Path to log file, logs to stderr if omitted.
    #[arg(long)]
    pub log_file: Option<String>,

    /// Verbosity, repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
