//! Configuration for the crc-sim application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::input_gen;

/// Complete configuration for one CRC run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Inputs ===
    /// Generator polynomial, algebraic or binary
    pub polynomial: String,

    /// Payload: text or a binary frame
    pub payload: String,

    // === Behavior ===
    /// Run the corruption scenario after encoding
    pub corrupt: bool,

    /// Seed used for randomized defaults
    pub seed: u64,

    /// Whether to print the division step trace
    pub show_trace: bool,

    /// Whether to print detailed config
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no polynomial or payload is provided, generates randomized defaults
    /// using a time-based seed. If --seed is provided, uses that seed for all
    /// randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut polynomial: Option<String> = None;
        let mut payload: Option<String> = None;
        let mut seed: Option<u64> = None;
        let mut corrupt = false;
        let mut show_trace = false;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--poly" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--poly requires a polynomial".to_string());
                    }
                    polynomial = Some(args[i].clone());
                }
                "--data" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--data requires a payload".to_string());
                    }
                    payload = Some(args[i].clone());
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--corrupt" => {
                    corrupt = true;
                }
                "--show-trace" => {
                    show_trace = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            polynomial: polynomial
                .unwrap_or_else(|| input_gen::pick_generator(&mut rng).to_string()),
            payload: payload.unwrap_or_else(|| {
                let bits = rng.gen_range(16..=48);
                input_gen::sample_payload(&mut rng, bits)
            }),
            corrupt,
            seed,
            show_trace,
            print_config,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Polynomial: {}", self.polynomial);
        println!("Payload:    {}", self.payload);
        println!("Seed:       {}", self.seed);
        println!("Corrupt:    {}", self.corrupt);
        println!("Show trace: {}", self.show_trace);
        println!();
    }
}

fn print_help() {
    println!("crc-sim: Educational CRC encoder/verifier with arbitrary generator polynomials");
    println!();
    println!("USAGE:");
    println!("    crc-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --poly <SPEC>      Generator polynomial, e.g. 'x^4+x+1' or '10011'");
    println!("                       (default: random classic polynomial)");
    println!("    --data <PAYLOAD>   Payload text, or a frame already in binary");
    println!("                       (default: random bit string)");
    println!("    --corrupt          Corrupt the frame tail and re-verify");
    println!("    --seed <N>         Random seed for default inputs");
    println!();
    println!("    --show-trace       Print the division step trace");
    println!("    --print-config     Print resolved configuration");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    crc-sim                                  # Run with random defaults");
    println!("    crc-sim --seed 42                        # Deterministic run");
    println!("    crc-sim --poly 'x^3+x+1' --data 1101011011");
    println!("    crc-sim --poly 10011 --data 'hello' --corrupt --show-trace");
    println!();
}
