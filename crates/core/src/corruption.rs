//! Corruption scenarios for demos and tests.
//!
//! Nothing here is part of the engine contract: these helpers manufacture
//! damaged frames so the verify pass has something interesting to catch.
//!
//! # Scenarios
//!
//! - `flip_bit`: flip exactly one bit; with a non-trivial generator this is
//!   always detected, which is the defining property of a CRC
//! - `corrupt_tail` / `simulate`: the legacy demo corruption — force the
//!   last payload bit to `1`, then smash the final two bits into seven `1`
//!   bits. The resulting verdict depends on the payload and generator; it is
//!   a scenario generator, not a detection guarantee.

use tracing::debug;

use crate::engine::{encode, verify};
use crate::error::{DivisionError, Result};
use crate::polynomial::Generator;

/// Width of the all-ones burst written over the payload tail.
const BURST: &str = "1111111";

/// Outcome of one run of the legacy corruption scenario.
#[derive(Debug, Clone)]
pub struct CorruptionOutcome {
    /// The damaged payload bits
    pub corrupted_bits: String,

    /// Checksum re-derived from the damaged payload
    pub corrupted_checksum: String,

    /// Final window of the verify pass
    pub remainder: String,

    /// True iff the verify pass flagged the frame as corrupted
    pub detected: bool,
}

/// Flip the bit at `index`. Returns `None` if `index` is out of range.
pub fn flip_bit(bits: &str, index: usize) -> Option<String> {
    let mut bytes = bits.as_bytes().to_vec();
    let bit = bytes.get_mut(index)?;
    *bit = match *bit {
        b'0' => b'1',
        _ => b'0',
    };
    String::from_utf8(bytes).ok()
}

/// Apply the legacy tail corruption: force the last bit to `1`, then replace
/// the final two bits with an all-ones burst.
///
/// # Errors
/// `DivisionError::FrameTooShort` if the payload has fewer than 2 bits.
pub fn corrupt_tail(bits: &str) -> Result<String> {
    if bits.len() < 2 {
        return Err(DivisionError::FrameTooShort {
            required: 2,
            actual: bits.len(),
        }
        .into());
    }

    let mut forced = bits[..bits.len() - 1].to_string();
    forced.push('1');

    let mut corrupted = forced[..forced.len() - 2].to_string();
    corrupted.push_str(BURST);
    Ok(corrupted)
}

/// Run the legacy demo: corrupt the payload tail, re-derive a checksum from
/// the damaged bits, then verify the original (last-bit-forced) payload
/// against that checksum.
pub fn simulate(payload_bits: &str, generator: &Generator) -> Result<CorruptionOutcome> {
    if payload_bits.len() < 2 {
        return Err(DivisionError::FrameTooShort {
            required: 2,
            actual: payload_bits.len(),
        }
        .into());
    }

    let mut forced = payload_bits[..payload_bits.len() - 1].to_string();
    forced.push('1');

    let corrupted_bits = corrupt_tail(payload_bits)?;
    let corrupted_checksum = encode(&corrupted_bits, generator)?.checksum;
    let verified = verify(&forced, generator, &corrupted_checksum)?;
    let detected = !verified.clean;

    debug!(
        corrupted = %corrupted_bits,
        checksum = %corrupted_checksum,
        detected,
        "corruption scenario complete"
    );

    Ok(CorruptionOutcome {
        corrupted_bits,
        corrupted_checksum,
        remainder: verified.remainder,
        detected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_bit() {
        assert_eq!(flip_bit("1010", 0).unwrap(), "0010");
        assert_eq!(flip_bit("1010", 3).unwrap(), "1011");
        assert!(flip_bit("1010", 4).is_none());
    }

    #[test]
    fn test_corrupt_tail_shape() {
        // last two bits replaced by the seven-bit burst; length grows by 5
        let corrupted = corrupt_tail("1101011011").unwrap();
        assert_eq!(corrupted, "110101101111111");
        assert_eq!(corrupted.len(), 10 + 5);
    }

    #[test]
    fn test_corrupt_tail_too_short() {
        assert!(corrupt_tail("1").is_err());
    }

    #[test]
    fn test_simulate_textbook_case_detected() {
        let g = Generator::parse("x^4+x+1").unwrap();
        let outcome = simulate("1101011011", &g).unwrap();
        assert_eq!(outcome.corrupted_bits, "110101101111111");
        assert_eq!(outcome.corrupted_checksum, "0101");
        assert!(outcome.detected);
    }

    #[test]
    fn test_simulate_is_not_a_detection_guarantee() {
        // this particular payload collides with its damaged checksum
        let g = Generator::parse("x^3+x+1").unwrap();
        let outcome = simulate("110100111011", &g).unwrap();
        assert_eq!(outcome.corrupted_checksum, "001");
        assert!(!outcome.detected);
    }
}
