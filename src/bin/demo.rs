//! kvdict Demo Binary
//!
//! Builds a dictionary from `KEY=VALUE` arguments, applies deletions and
//! prints the contents in insertion order.

use clap::Parser;
use kvdict::{Blob, Config, Dictionary, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Pairs inserted when none are given on the command line
const SAMPLE_PAIRS: [(&str, &str); 3] = [
    ("hello", "world!"),
    ("balls", "I have 69 balls!"),
    ("iscute", "no :<"),
];

/// kvdict demo
#[derive(Parser, Debug)]
#[command(name = "kvdict-demo")]
#[command(about = "Insert text pairs into an ordered blob dictionary and print it")]
#[command(version)]
struct Args {
    /// Pairs to insert, as KEY=VALUE (defaults to a built-in sample)
    #[arg(value_parser = parse_pair)]
    pairs: Vec<(String, String)>,

    /// Key to delete after all inserts (repeatable)
    #[arg(short, long = "delete", value_name = "KEY")]
    delete: Vec<String>,

    /// Capacity allocated on the first insert (power of two)
    #[arg(short, long, default_value = "8")]
    initial_capacity: usize,

    /// Refuse to grow past this many slots
    #[arg(short, long)]
    max_capacity: Option<usize>,
}

fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kvdict=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("kvdict demo v{}", kvdict::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut builder = Config::builder().initial_capacity(args.initial_capacity);
    if let Some(max) = args.max_capacity {
        builder = builder.max_capacity(max);
    }

    let mut dict = Dictionary::with_config(builder.build())?;

    let pairs: Vec<(String, String)> = if args.pairs.is_empty() {
        SAMPLE_PAIRS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    } else {
        args.pairs
    };

    for (key, value) in &pairs {
        dict.set(Blob::from_text(key)?, Blob::from_text(value)?)?;
    }

    for key in &args.delete {
        if !dict.delete(Blob::from_text(key)?) {
            tracing::info!("Key not present, nothing deleted: {}", key);
        }
    }

    print_dict(&dict);

    Ok(())
}

fn print_dict(dict: &Dictionary) {
    println!("dict contents ({} items):", dict.len());

    for (key, value) in dict {
        println!("\t{} -> {}", key.to_text_lossy(), value.to_text_lossy());
    }
}
