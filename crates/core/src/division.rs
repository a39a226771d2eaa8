//! Modulo-2 long division in explicit shift-register form.
//!
//! This is the engine both encode and verify run through. It keeps a window
//! of `degree + 1` bits that slides over the extended frame: when the
//! window's leading bit is `1` the window is XORed with the generator word,
//! then the window shifts left and pulls in the next frame bit.
//!
//! # Stepping Rule
//!
//! The window keeps its leading bit explicitly instead of discarding it with
//! a closing XOR pass, so the returned remainder is `degree + 1` characters
//! wide and only its last `degree` bits are the checksum proper. Encode and
//! verify are only mutually consistent because they share this exact rule,
//! so it is kept bit-for-bit, including the deletion of the final trace
//! entry (see `divide`).
//!
//! # Trace
//!
//! Every division returns an append-only list of human-readable step
//! descriptions. The trace is a per-call value owned by the caller, never a
//! process-wide buffer, so concurrent requests cannot interleave entries.

use tracing::{debug, trace};

use crate::error::{DivisionError, Result};
use crate::polynomial::Generator;

/// Result of one division pass.
#[derive(Debug, Clone)]
pub struct Division {
    /// Final window contents: `degree + 1` characters, of which the last
    /// `degree` are the checksum bits
    pub remainder: String,

    /// One human-readable entry per division step
    pub trace: Vec<String>,
}

/// Divide a bit sequence by the generator word.
///
/// The frame is extended with `appended` when given (the verify pass), or
/// with `degree` zero bits (the encode pass), before division starts.
///
/// # Errors
/// - `DivisionError::EmptyData` for an empty data sequence
/// - `DivisionError::DegenerateGenerator` for a generator word shorter than
///   2 bits (degree 0 yields a zero-width checksum)
/// - `DivisionError::NonBinary` if data or appended bits contain anything
///   other than `0`/`1`
/// - `DivisionError::FrameTooShort` if the extended frame is shorter than
///   the generator word
pub fn divide(data: &str, generator: &Generator, appended: Option<&str>) -> Result<Division> {
    if data.is_empty() {
        return Err(DivisionError::EmptyData.into());
    }
    let divisor = generator.bits();
    if divisor.len() < 2 {
        return Err(DivisionError::DegenerateGenerator {
            length: divisor.len(),
        }
        .into());
    }
    check_binary(data)?;
    if let Some(tail) = appended {
        check_binary(tail)?;
    }

    let degree = generator.degree();
    let mut extended = String::with_capacity(data.len() + degree.max(appended.map_or(0, str::len)));
    extended.push_str(data);
    match appended {
        Some(tail) => extended.push_str(tail),
        None => extended.extend(std::iter::repeat('0').take(degree)),
    }

    if extended.len() < divisor.len() {
        return Err(DivisionError::FrameTooShort {
            required: divisor.len(),
            actual: extended.len(),
        }
        .into());
    }

    debug!(
        data_len = data.len(),
        divisor,
        degree,
        appended = appended.is_some(),
        "starting modulo-2 division"
    );

    // The window holds the first degree+1 bits of the extended frame.
    let mut remainder = extended[..degree + 1].to_string();
    let mut steps = vec![step_entry(&extended, divisor, &remainder)];

    let mut i = degree;
    while i < extended.len() {
        let window = remainder.clone();
        if remainder.as_bytes()[0] == b'1' {
            remainder = xor(&remainder, divisor);
            trace!(step = i - degree, %window, %remainder, "xor with divisor");
            let last = steps.len() - 1;
            steps[last] = step_entry(&window, divisor, &remainder);
        }

        if i < extended.len() - 1 {
            remainder.remove(0);
            remainder.push(extended.as_bytes()[i + 1] as char);
            i += 1;
            steps.push(step_entry(&window, divisor, &remainder));
        } else {
            break;
        }
    }

    // The last entry reflects the window before the final shift was
    // processed; it is dropped rather than reported. Kept as-is for
    // compatibility with the system this engine replaces.
    steps.pop();

    debug!(%remainder, steps = steps.len(), "division complete");

    Ok(Division {
        remainder,
        trace: steps,
    })
}

/// Decide the corruption verdict for a verification remainder.
///
/// A frame is uncorrupted iff the last `degree` bits of the remainder are
/// all zero. The window carries one extra leading bit (see module docs), so
/// the comparison covers exactly `degree` bits, never `degree + 1`.
pub fn is_uncorrupted(remainder: &str, degree: usize) -> bool {
    remainder.len() >= degree && remainder.bytes().rev().take(degree).all(|b| b == b'0')
}

/// Bitwise XOR of two bit strings, up to the shorter length.
fn xor(a: &str, b: &str) -> String {
    a.bytes()
        .zip(b.bytes())
        .map(|(x, y)| if x == y { '0' } else { '1' })
        .collect()
}

fn step_entry(content: &str, divisor: &str, remainder: &str) -> String {
    format!(
        "len: {}, content: {}, divisor: {}, remainder: {}",
        remainder.len(),
        content,
        divisor,
        remainder
    )
}

fn check_binary(s: &str) -> Result<()> {
    for (position, c) in s.chars().enumerate() {
        if c != '0' && c != '1' {
            return Err(DivisionError::NonBinary { found: c, position }.into());
        }
    }
    Ok(())
}
