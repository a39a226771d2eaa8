//! The encode/verify protocol: one request, two division passes.
//!
//! This is the boundary a transport shell (CLI, HTTP handler, test harness)
//! talks to. It supplies a generator spec, a payload, and an optional
//! corruption flag; it gets back a checksum, the step trace, and a verdict.
//! Each request is synchronous and owns all of its state.
//!
//! # Protocol
//!
//! - **Encode**: divide the payload bits padded with `degree` zeros; the
//!   checksum is the last `degree` bits of the final window.
//! - **Verify**: divide the payload bits with the checksum appended; the
//!   frame is clean iff the last `degree` bits of the remainder are zero.
//!
//! The full `degree + 1`-bit window is exposed on [`Verified`] for callers
//! that want to inspect it, but the verdict only ever reads `degree` bits.

use tracing::{debug, info};

use crate::bits::to_bits;
use crate::corruption;
use crate::division::{divide, is_uncorrupted};
use crate::error::Result;
use crate::polynomial::Generator;

/// One encode pass: payload bits in, checksum out.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Checksum bits, exactly `degree` characters
    pub checksum: String,

    /// Step trace of the encode division
    pub trace: Vec<String>,
}

/// One verify pass over a received frame.
#[derive(Debug, Clone)]
pub struct Verified {
    /// True iff the check remainder is all zero
    pub clean: bool,

    /// The final `degree + 1`-bit window of the verify division
    pub remainder: String,

    /// Step trace of the verify division
    pub trace: Vec<String>,
}

/// What a transport shell hands the engine.
#[derive(Debug, Clone)]
pub struct CrcRequest {
    /// Generator polynomial, algebraic (`x^3+x+1`) or binary (`1011`)
    pub generator: String,

    /// Payload text, or a frame already in binary
    pub payload: String,

    /// Run the corruption scenario instead of the clean verify pass
    pub simulate_corruption: bool,
}

/// What the engine hands back.
#[derive(Debug, Clone)]
pub struct CrcReport {
    /// Canonical generator word
    pub generator_bits: String,

    /// Generator degree, and therefore checksum width
    pub degree: usize,

    /// Payload encoded as bits (the frame that was divided)
    pub payload_bits: String,

    /// Checksum of the (uncorrupted) payload
    pub checksum: String,

    /// Step trace of the encode division
    pub trace: Vec<String>,

    /// Verdict of the verify pass: true means corruption was detected
    pub corrupted: bool,
}

/// Compute the checksum for a payload bit sequence.
pub fn encode(payload_bits: &str, generator: &Generator) -> Result<Encoded> {
    let division = divide(payload_bits, generator, None)?;
    // The window's leading bit was already consumed by the stepping rule;
    // only the trailing degree bits are the checksum.
    let checksum = division.remainder[division.remainder.len() - generator.degree()..].to_string();
    debug!(%checksum, "encode pass complete");
    Ok(Encoded {
        checksum,
        trace: division.trace,
    })
}

/// Check a received payload against a checksum.
pub fn verify(payload_bits: &str, generator: &Generator, checksum: &str) -> Result<Verified> {
    let division = divide(payload_bits, generator, Some(checksum))?;
    let clean = is_uncorrupted(&division.remainder, generator.degree());
    debug!(remainder = %division.remainder, clean, "verify pass complete");
    Ok(Verified {
        clean,
        remainder: division.remainder,
        trace: division.trace,
    })
}

/// Serve one request: parse, encode, then verify (or run the corruption
/// scenario when asked to).
pub fn run(request: &CrcRequest) -> Result<CrcReport> {
    let generator = Generator::parse(&request.generator)?;
    let payload_bits = to_bits(&request.payload);

    info!(
        generator = generator.bits(),
        degree = generator.degree(),
        payload_bits = payload_bits.len(),
        "serving CRC request"
    );

    let encoded = encode(&payload_bits, &generator)?;

    let corrupted = if request.simulate_corruption {
        let outcome = corruption::simulate(&payload_bits, &generator)?;
        outcome.detected
    } else {
        !verify(&payload_bits, &generator, &encoded.checksum)?.clean
    };

    Ok(CrcReport {
        generator_bits: generator.bits().to_string(),
        degree: generator.degree(),
        payload_bits,
        checksum: encoded.checksum,
        trace: encoded.trace,
        corrupted,
    })
}
