use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

use geotext_join::cli::Cli;
use geotext_join::config::JoinConfig;
use geotext_join::{io, join, output};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let cfg = match cli.to_join_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(&cli, cfg) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, cfg: JoinConfig) -> Result<()> {
    let start = Instant::now();

    let a = io::read_records(Path::new(&cli.input_a))
        .with_context(|| format!("loading dataset A from {}", cli.input_a))?;
    let b = io::read_records(Path::new(&cli.input_b))
        .with_context(|| format!("loading dataset B from {}", cli.input_b))?;
    info!("Loaded {} A-records and {} B-records", a.len(), b.len());

    let results = join::join_datasets(&a, &b, &cfg)?;
    let lines = output::render_sorted(results);
    io::write_lines(Path::new(&cli.output), &lines)
        .with_context(|| format!("writing results to {}", cli.output))?;

    info!(
        "Wrote {} result pairs to {} in {:?}",
        lines.len(),
        cli.output,
        start.elapsed()
    );
    Ok(())
}
