use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use tse_core::builder::build;
use tse_core::persist::save_index;
use tse_core::Index;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build and re-save word -> (docID, count) index files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every page in a crawler directory and write the index file
    Build {
        /// Directory produced by the crawler
        #[arg(long)]
        page_dir: PathBuf,
        /// Index file to create or overwrite
        #[arg(long)]
        index_file: PathBuf,
        /// Initial size of the word table
        #[arg(long, default_value_t = 300)]
        slots: usize,
    },
    /// Load an index file and write it back out (round-trip check)
    Resave {
        /// Index file produced by `indexer build`
        #[arg(long)]
        old: PathBuf,
        /// Index file to create or overwrite
        #[arg(long)]
        new: PathBuf,
        #[arg(long, default_value_t = 300)]
        slots: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { page_dir, index_file, slots } => build_command(&page_dir, &index_file, slots),
        Commands::Resave { old, new, slots } => resave_command(&old, &new, slots),
    }
}

fn build_command(page_dir: &Path, index_file: &Path, slots: usize) -> Result<()> {
    if slots == 0 {
        bail!("--slots must be greater than 0");
    }
    if !page_dir.is_dir() {
        bail!("{} is not an existing directory", page_dir.display());
    }

    let mut index = Index::new(slots);
    let stats = build(page_dir, &mut index).with_context(|| format!("indexing {}", page_dir.display()))?;
    save_index(index_file, &index).with_context(|| format!("writing {}", index_file.display()))?;
    tracing::info!(documents = stats.documents, words = index.len(), output = %index_file.display(), "index written");
    Ok(())
}

fn resave_command(old: &Path, new: &Path, slots: usize) -> Result<()> {
    if slots == 0 {
        bail!("--slots must be greater than 0");
    }
    let index = Index::load_from(old, slots).with_context(|| format!("loading {}", old.display()))?;
    save_index(new, &index).with_context(|| format!("writing {}", new.display()))?;
    tracing::info!(words = index.len(), from = %old.display(), to = %new.display(), "index re-saved");
    Ok(())
}
