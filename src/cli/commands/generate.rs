//! Generate command - produce a synthetic benchmark graph

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, ensure};
use clap::Parser;

use crate::generator::{self, GeneratorOptions};

#[derive(Parser, Debug)]
#[command(about = "Generate a synthetic benchmark graph")]
pub struct GenerateArgs {
    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Vertices per segment (cycle, path, and random graph); at least 4
    #[arg(long, default_value_t = 333)]
    pub segment_size: usize,

    /// Degree parameter of the random segment
    #[arg(long, default_value_t = 10)]
    pub degree: usize,

    /// Output file (writes standard output when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    ensure!(
        args.segment_size >= 4,
        "segment size must be at least 4 (a 3-cycle is a clique, not a cycle)"
    );

    let options = GeneratorOptions {
        segment_size: args.segment_size,
        degree: args.degree,
    };
    let edge_list = generator::generate(&options, args.seed);

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            crate::io::write_edge_list(&mut writer, &edge_list)
                .with_context(|| format!("write edge list to {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("flush {}", path.display()))?;
        }
        None => {
            crate::io::write_edge_list(std::io::stdout().lock(), &edge_list)
                .context("write edge list to standard output")?;
        }
    }

    Ok(())
}
