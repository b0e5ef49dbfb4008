use anyhow::{bail, Result};
use clap::Parser;
use querier::{run, OutputFormat, Querier};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "querier")]
#[command(about = "Answer boolean keyword queries from stdin against an index file")]
struct Args {
    /// Directory produced by the crawler
    #[arg(long)]
    page_dir: PathBuf,
    /// Index file produced by the indexer
    #[arg(long)]
    index_file: PathBuf,
    /// Initial size of the word table
    #[arg(long, default_value_t = 500)]
    slots: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    if args.slots == 0 {
        bail!("--slots must be greater than 0");
    }
    if !args.page_dir.is_dir() {
        bail!("{} is not an existing directory", args.page_dir.display());
    }

    let querier = Querier::open(&args.page_dir, &args.index_file, args.slots)?;
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut out = io::stdout().lock();
    run(&querier, stdin.lock(), &mut out, args.format, prompt)
}
