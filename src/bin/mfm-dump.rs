use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use mfm_parser::{parse, tokenize, ParseOption};
use tracing_subscriber::EnvFilter;

/// Reads MFM from stdin and prints the tokens or the syntax tree as JSON.
#[derive(Parser, Debug)]
#[command(name = "mfm-dump")]
struct Args {
    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,

    /// Parse option as JSON, e.g. '{"enableUrl":false}'
    #[arg(long)]
    option: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mfm_parser=warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let option: ParseOption = match &args.option {
        Some(json) => serde_json::from_str(json).context("invalid --option")?,
        None => ParseOption::default(),
    };

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let result = tokenize(&input);
    let json = if args.tokens {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string_pretty(&parse(&result.tokens, &option))?
    };
    println!("{}", json);

    Ok(())
}
