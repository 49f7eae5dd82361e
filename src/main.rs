//! hashchain CLI
//!
//! Builds an in-memory hash-chained ledger and prints its records.
//!
//! # Commands
//!
//! - `demo` - Append payloads to a fresh chain and print every record
//! - `benchmark` - Measure mining throughput at the configured difficulty
//! - `config` - Print the effective configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use hashchain::config::Config;
use hashchain::ledger::{Chain, MiningStats};
use hashchain::logging::{init_logging, LogFormat};
use hashchain::report::{render, OutputFormat};

const DEMO_PAYLOADS: [&str; 3] = ["Block 1 Data", "Block 2 Data", "Block 3 Data"];

#[derive(Parser)]
#[command(name = "hashchain")]
#[command(version)]
#[command(about = "Append-only hash-chained ledger with proof-of-work admission")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/hashchain/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Leading zero hex characters required per record
    #[arg(short, long, global = true)]
    difficulty: Option<u8>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append payloads to a new chain and print every record
    Demo {
        /// Payloads to append (default: three sample blocks)
        data: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run mining benchmark
    Benchmark {
        /// Number of records to append
        #[arg(short, long, default_value = "100")]
        count: u32,
    },

    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.difficulty, cli.log_format);
    config.validate()?;

    init_logging(&config.log_level, config.log_format)?;

    match cli.command {
        Commands::Demo { data, format } => cmd_demo(&config, data, format),
        Commands::Benchmark { count } => cmd_benchmark(&config, count),
        Commands::Config => cmd_config(&config),
    }
}

fn append(chain: &mut Chain, config: &Config, payload: &str) -> anyhow::Result<()> {
    match config.max_attempts {
        Some(max) => {
            chain.try_append(payload, max)?;
        }
        None => {
            chain.append(payload);
        }
    }
    Ok(())
}

fn cmd_demo(config: &Config, data: Vec<String>, format: OutputFormat) -> anyhow::Result<()> {
    let difficulty = config.difficulty()?;
    let payloads: Vec<String> = if data.is_empty() {
        DEMO_PAYLOADS.iter().map(|s| s.to_string()).collect()
    } else {
        data
    };

    tracing::info!(%difficulty, records = payloads.len(), "building chain");

    let mut chain = Chain::with_difficulty(difficulty);
    for payload in &payloads {
        append(&mut chain, config, payload)?;
    }
    chain.verify()?;

    tracing::info!(
        length = chain.len(),
        attempts = chain.total_attempts(),
        "chain verified"
    );

    print!("{}", render(chain.records(), format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn cmd_benchmark(config: &Config, count: u32) -> anyhow::Result<()> {
    let difficulty = config.difficulty()?;
    println!(
        "Running benchmark with {} records at difficulty {}...",
        count, difficulty
    );

    let mut chain = Chain::with_difficulty(difficulty);
    let root_attempts = chain.total_attempts();

    let start = Instant::now();
    for i in 0..count {
        append(&mut chain, config, &format!("benchmark record {}", i))?;
    }

    let stats = MiningStats {
        attempts: chain.total_attempts() - root_attempts,
        elapsed: start.elapsed(),
    };
    let secs = stats.elapsed.as_secs_f64();
    let records_per_sec = if secs > 0.0 { count as f64 / secs } else { 0.0 };
    let per_record = if count > 0 {
        stats.attempts as f64 / count as f64
    } else {
        0.0
    };

    println!("\nResults:");
    println!("  Records appended: {}", count);
    println!("  Time elapsed: {:.2}s", secs);
    println!("  Records/s: {:.2}", records_per_sec);
    println!("  Hashrate: {:.2} H/s", stats.hashrate());
    println!(
        "  Attempts per record: {:.1} (expected {:.1})",
        per_record,
        difficulty.expected_attempts()
    );

    chain.verify()?;
    Ok(())
}

fn cmd_config(config: &Config) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
