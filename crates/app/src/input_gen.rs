//! Demo input generation.
//!
//! When no polynomial or payload is specified, we generate inputs with
//! interesting division characteristics so a default run still shows the
//! engine doing real work.
//!
//! # Design
//!
//! Generated inputs are:
//! - A generator drawn from a small set of classic polynomials (all with a
//!   constant term, so single-bit errors stay detectable)
//! - A payload bit string with a mix of runs and noise, long enough that the
//!   division trace has some substance
//!
//! All randomness comes from the caller's seeded RNG, so runs are
//! reproducible.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Classic generator polynomials used for randomized defaults.
const GENERATORS: &[&str] = &[
    "x^3+x+1",
    "x^4+x+1",
    "x^5+x^2+1",
    "x^8+x^2+x+1",
    "x^16+x^15+x^2+1",
];

/// Pick a generator polynomial for a default run.
pub fn pick_generator(rng: &mut ChaCha8Rng) -> &'static str {
    GENERATORS[rng.gen_range(0..GENERATORS.len())]
}

/// Generate a payload bit string with mixed structure.
///
/// Alternates short runs of a repeated bit with stretches of random bits,
/// which makes the XOR steps in the trace easy to follow.
pub fn sample_payload(rng: &mut ChaCha8Rng, bits: usize) -> String {
    let mut payload = String::with_capacity(bits);

    while payload.len() < bits {
        let remaining = bits - payload.len();
        let span = rng.gen_range(1..=remaining.min(8));

        if rng.gen_bool(0.4) {
            // run of a single bit value
            let bit = if rng.gen::<bool>() { '1' } else { '0' };
            payload.extend(std::iter::repeat(bit).take(span));
        } else {
            // random stretch
            for _ in 0..span {
                payload.push(if rng.gen::<bool>() { '1' } else { '0' });
            }
        }
    }

    payload
}
