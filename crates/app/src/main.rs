//! crc-sim: thin CLI shell around the crc-sim-core engine.
//!
//! Resolves a configuration (explicit flags or seeded defaults), hands the
//! engine one request, and prints the report. All the interesting work
//! happens in `crc_sim_core`.

mod config;
mod input_gen;

use crc_sim_core::engine::{run, CrcRequest};
use crc_sim_core::Generator;
use tracing::error;
use tracing_subscriber::EnvFilter;

use config::Config;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let request = CrcRequest {
        generator: config.polynomial.clone(),
        payload: config.payload.clone(),
        simulate_corruption: config.corrupt,
    };

    let report = match run(&request) {
        Ok(report) => report,
        Err(err) => {
            error!(%err, "request failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!("=== Generator ===");
    println!("Word:    {}", report.generator_bits);
    if let Ok(generator) = Generator::parse(&report.generator_bits) {
        println!("Algebra: {}", generator.algebraic());
    }
    println!("Degree:  {}", report.degree);
    println!();
    println!("=== Frame ===");
    println!("Payload bits: {}", report.payload_bits);
    println!("Checksum:     {}", report.checksum);
    println!("Transmitted:  {}{}", report.payload_bits, report.checksum);
    println!();

    if config.show_trace {
        println!("=== Division Trace ===");
        for (step, entry) in report.trace.iter().enumerate() {
            println!("Step {step}: {entry}");
        }
        println!();
    }

    println!("=== Verdict ===");
    if report.corrupted {
        println!("The frame is CORRUPTED.");
    } else {
        println!("The frame is clean.");
    }
}
