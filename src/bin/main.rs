// src/bin/main.rs
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;

use rust_spm_sdk::{RustSdk, SdkResult};

#[derive(Parser, Debug)]
#[command(name = "rust-sdk")]
#[command(about = "Drive the Rust SDK through its C boundary")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize the SDK and report readiness
    Init,
    /// Add two 32-bit integers (wrapping)
    #[command(allow_negative_numbers = true)]
    Add { a: i32, b: i32 },
    /// Process a string and print the result
    Process { input: String },
    /// Compute the n-th Fibonacci number
    #[command(allow_negative_numbers = true)]
    Fib { n: i32 },
    /// Print the SDK version
    Version,
    /// Time the add call
    Bench {
        #[arg(long, default_value_t = 1000)]
        iterations: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sdk = RustSdk::shared();

    if !sdk.initialize() {
        bail!("SDK initialization failed (check RUST_SDK_LOG / RUST_SDK_LOG_ANSI)");
    }

    match cli.command {
        Commands::Init => {
            let Some(system) = rust_spm_sdk::system() else {
                bail!("SDK reported ready but holds no state");
            };
            let uptime_ms = system.uptime().as_secs_f64() * 1000.0;
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "ready": sdk.is_ready(),
                        "version": sdk.version(),
                        "log_filter": system.config.log_filter,
                        "uptime_ms": uptime_ms,
                    })
                );
            } else {
                println!("{} (version {})", "✅ SDK ready".green(), sdk.version());
                println!("   log filter: {}", system.config.log_filter);
                println!("   up for {uptime_ms:.3} ms");
            }
        }
        Commands::Add { a, b } => {
            let sum = sdk.add(a, b);
            if cli.json {
                println!("{}", json!({ "a": a, "b": b, "sum": sum }));
            } else {
                println!("{a} + {b} = {}", sum.to_string().bold());
            }
        }
        Commands::Process { input } => {
            let result = sdk.process_string(&input);
            print_result(&result, cli.json)?;
            if !result.success {
                bail!("processing failed");
            }
        }
        Commands::Fib { n } => {
            if n < 0 {
                bail!("n must be non-negative, got {n}");
            }
            let value = sdk.fibonacci(n);
            if cli.json {
                println!("{}", json!({ "n": n, "fibonacci": value }));
            } else {
                println!("fib({n}) = {}", value.to_string().bold());
            }
        }
        Commands::Version => {
            if cli.json {
                println!("{}", json!({ "version": sdk.version() }));
            } else {
                println!("{}", sdk.version());
            }
        }
        Commands::Bench { iterations } => {
            let avg_ms = sdk.benchmark(iterations);
            if cli.json {
                println!("{}", json!({ "iterations": iterations, "avg_ms": avg_ms }));
            } else {
                println!(
                    "{} {avg_ms:.6} ms over {iterations} iterations",
                    "⏱  average add:".cyan()
                );
            }
        }
    }
    Ok(())
}

fn print_result(result: &SdkResult, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }
    let status = if result.success { "ok".green() } else { "failed".red() };
    println!("{status}  value={}", result.value);
    if let Some(message) = &result.message {
        println!("   {message}");
    }
    Ok(())
}
