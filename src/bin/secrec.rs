use std::{fs::File, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use secrec::ShareSet;

/// Reconstruct a secret from shares given in JSON format
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file, read from standard input if omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let shares = match &args.input {
        Some(path) => {
            info!("Reading shares from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            ShareSet::from_reader(io::BufReader::new(file))?
        }
        None => {
            info!("Reading shares from standard input");
            ShareSet::from_reader(io::stdin().lock())?
        }
    };
    info!(
        "Found {} shares, threshold {}",
        shares.shares.len(),
        shares.keys.k
    );
    let rec = shares.reconstruct()?;
    print!("{rec}");
    Ok(())
}
