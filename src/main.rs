use anyhow::Result;
use clap::Parser;

use biosymbols::args::Args;
use biosymbols::runner::Runner;

fn main() -> Result<()> {
    let args = Args::parse();
    let runner = Runner::new(args)?;
    runner.start()
}
