//! Signal lab command-line interface
//!
//! Subcommands:
//! - `generate`: write a synthetic sine + square test signal to CSV
//! - `run`: extract per-chunk features from a signal CSV into a feature CSV
//! - `profile`: time the two RMS implementations on random data

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use siglab_core::math::{rms, rms_unrolled};
use siglab_pipeline::{
    generate_signal, load_signal_csv, run_pipeline, save_signal_csv, timed, timed_with_threshold,
    Config, CsvSink, FeatureSink,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "siglab")]
#[command(author, version, about = "Signal feature extraction lab", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic signal and save it to CSV
    Generate {
        /// Output CSV path
        #[arg(short, long, default_value = "data/signal.csv")]
        out: PathBuf,

        /// Number of samples
        #[arg(short, long, default_value = "4000")]
        n: usize,

        /// Standard deviation of additive Gaussian noise
        #[arg(long)]
        noise: Option<f64>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the chunked feature-extraction pipeline over a signal CSV
    Run {
        /// Input CSV path
        #[arg(default_value = "data/signal.csv")]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "data/features.csv")]
        out: PathBuf,

        /// Chunk size in samples
        #[arg(long)]
        chunk: Option<usize>,

        /// Chunks between incremental checkpoints
        #[arg(long)]
        checkpoint: Option<usize>,
    },

    /// Time the simple and unrolled RMS implementations
    Profile {
        /// Number of random samples
        #[arg(long, default_value = "1000000")]
        size: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> anyhow::Result<()> {
    let cfg = Config::default();

    match command {
        Commands::Generate { out, n, noise, seed } => {
            let noise = noise.unwrap_or(cfg.noise_std);
            info!(n, noise, "generating synthetic signal");
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let signal = generate_signal(n, noise, &mut rng)?;
            save_signal_csv(&out, &signal)
                .with_context(|| format!("writing signal to {}", out.display()))?;
            info!(path = %out.display(), "signal saved");
        }

        Commands::Run {
            input,
            out,
            chunk,
            checkpoint,
        } => {
            let chunk = chunk.unwrap_or(cfg.chunk_size);
            let checkpoint = checkpoint.unwrap_or(cfg.checkpoint_interval);

            let signal = load_signal_csv(&input)?;
            println!("Processing {} samples in chunks of {chunk}", signal.len());

            let mut sink = CsvSink::new(&out);
            let rows = run_pipeline(&signal, &mut sink, chunk, checkpoint)?;
            // The driver only flushes on checkpoint boundaries; write the
            // trailing partial batch so the output file is complete.
            sink.persist(&rows)?;
            println!(
                "Saved {} feature vectors to {}",
                rows.len(),
                out.display()
            );
        }

        Commands::Profile { size } => {
            use rand::Rng;

            let mut rng = StdRng::from_entropy();
            let data: Vec<f64> = (0..size).map(|_| rng.gen_range(-1.0..1.0)).collect();
            println!("Test array size: {size}");

            // Warn when the scalar loop is unexpectedly slow for the size
            let slow_ms = 1000.0 * size as f64 / 1e6;
            let (simple, simple_ms) = timed_with_threshold("rms", slow_ms, || rms(&data));
            println!("Simple RMS:   {simple:.6} in {simple_ms:.2} ms");

            let (unrolled, unrolled_ms) = timed("rms_unrolled", || rms_unrolled(&data));
            println!("Unrolled RMS: {unrolled:.6} in {unrolled_ms:.2} ms");

            if unrolled_ms > 0.0 {
                println!("Speedup: {:.1}x", simple_ms / unrolled_ms);
            }
        }
    }

    Ok(())
}
