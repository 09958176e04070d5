//! # fastinv CLI
//!
//! Command-line explorer for the fastinv reciprocal square root kernel.
//! Evaluates values, shows their bit-level transform, and measures error
//! across a range.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{bits, eval, sweep};

/// Explore the magic-constant reciprocal square root
#[derive(Parser)]
#[command(name = "fastinv")]
#[command(about = "Evaluate and measure the fast reciprocal square root")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the approximation for one or more values
    Eval(eval::EvalArgs),

    /// Show the IEEE 754 bits of a value and of its initial guess
    Bits(bits::BitsArgs),

    /// Measure relative error over a log-spaced range
    Sweep(sweep::SweepArgs),
}

fn init_logging() {
    let env = env_logger::Env::new()
        .filter("FASTINV_LOG")
        .write_style("FASTINV_LOG_STYLE");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval(args) => eval::execute(&args),
        Commands::Bits(args) => bits::execute(&args),
        Commands::Sweep(args) => sweep::execute(&args),
    }
}
