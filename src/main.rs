use std::error::Error;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use mingzi::{AppConfig, GroupSelector, NameForge, StyleSelector};

/// Deterministic Chinese given-name generator.
#[derive(Parser, Debug)]
#[command(name = "mingzi", version, about)]
struct Cli {
    /// Free-text seed driving the base record.
    seed: String,

    /// Target group: male, female or neutral (unknown values default to
    /// neutral).
    #[arg(long, default_value = "neutral")]
    group: String,

    /// Style: traditional, modern, business, cute or neutral (unknown
    /// values default to traditional).
    #[arg(long, default_value = "traditional")]
    style: String,

    /// Seed the RNG for reproducible output.
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Override the number of records.
    #[arg(long)]
    count: Option<usize>,

    /// Emit the outcome as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut generation = AppConfig::load().generation;
    if let Some(count) = cli.count {
        generation.target_count = count;
    }
    let forge = NameForge::with_config(generation)?;

    let group = GroupSelector::from_param(&cli.group);
    let style = StyleSelector::from_param(&cli.style);
    let mut rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = forge.generate(&cli.seed, group, style, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        for record in &outcome.records {
            println!(
                "{}  [{}]  {}",
                record.rendered(),
                record.transliteration,
                record.description
            );
        }
        if outcome.is_degraded() {
            eprintln!("note: fallback data substituted for an internal fault");
        }
    }

    Ok(())
}
