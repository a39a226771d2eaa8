//! Generator polynomial parsing and binary conversion.
//!
//! A generator polynomial is a set of exponents with coefficient 1 over
//! GF(2). It can be written two ways:
//! - Algebraically: `x^4+x+1`
//! - As a raw generator word: `10011` (MSB first, length = degree + 1)
//!
//! Both spell the same divisor; `parse` accepts either and always produces
//! the canonical generator word.
//!
//! # Legacy grammar
//!
//! The algebraic scanner deliberately keeps the behavior of the system this
//! engine replaces rather than a textbook polynomial parser:
//! - Signs and coefficients are ignored: `3x^2` reads as `x^2`
//! - Exponents are a set, so repeated terms collapse
//! - Exponent 1 is included once whenever the letter `x` appears anywhere,
//!   so bare `x` terms are coalesced, never counted per occurrence
//! - A bare integer constant turns on exponent 0
//!
//! Downstream correctness only needs encode and verify to agree on the word,
//! not faithfulness to algebra, so this grammar is preserved as-is.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PolynomialError, Result};

/// Matches one algebraic term: an optional coefficient followed by `x^<exp>`,
/// or a bare integer constant. The exponent group is permissive on purpose so
/// that `x^` and `x^abc` surface as `InvalidExponent` instead of being
/// silently skipped.
fn term_pattern() -> &'static Regex {
    static TERM: OnceLock<Regex> = OnceLock::new();
    TERM.get_or_init(|| {
        Regex::new(r"(?:[0-9]+)?x\^([^+\s]*)|(?:[0-9]+)?x|([0-9]+)").expect("term pattern is valid")
    })
}

/// A parsed generator polynomial in its canonical binary-word form.
///
/// The word is a string of `0`/`1` characters, most-significant bit first,
/// with length = degree + 1. Immutable after parsing.
///
/// # Invariants
/// - Non-empty
/// - Contains only `0` and `1`
/// - At least one bit is `1` (the zero polynomial is rejected at parse time)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    bits: String,
}

impl Generator {
    /// Parse a generator polynomial from either notation.
    ///
    /// A string consisting solely of `0`/`1` is taken verbatim as a generator
    /// word. This short-circuit is checked first: an algebraic parse of a
    /// string like `101` would be meaningless.
    ///
    /// # Errors
    /// - `PolynomialError::InvalidExponent` if an `x^` term has a missing or
    ///   malformed exponent
    /// - `PolynomialError::Empty` if no terms are recognized, or a binary
    ///   word contains no `1` bits
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();

        if !spec.is_empty() && is_binary(spec) {
            if !spec.contains('1') {
                return Err(PolynomialError::Empty.into());
            }
            return Ok(Self {
                bits: spec.to_string(),
            });
        }

        let exponents = scan_exponents(spec)?;
        Ok(Self {
            bits: word_from_exponents(&exponents),
        })
    }

    /// The generator word as a bit string, MSB first.
    pub fn bits(&self) -> &str {
        &self.bits
    }

    /// Degree of the polynomial: word length minus one.
    ///
    /// For a user-supplied binary word with leading zeros this is the word
    /// degree, not the algebraic degree; the division engine only ever cares
    /// about the word length.
    pub fn degree(&self) -> usize {
        self.bits.len() - 1
    }

    /// Recover the exponent set from the generator word.
    pub fn exponents(&self) -> Vec<usize> {
        let len = self.bits.len();
        self.bits
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'1')
            .map(|(i, _)| len - i - 1)
            .collect()
    }

    /// Render the polynomial algebraically, highest exponent first.
    pub fn algebraic(&self) -> String {
        let terms: Vec<String> = self
            .exponents()
            .into_iter()
            .map(|exp| match exp {
                0 => "1".to_string(),
                1 => "x".to_string(),
                e => format!("x^{e}"),
            })
            .collect();
        terms.join("+")
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

/// True if the string contains only `0` and `1` characters.
pub fn is_binary(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
}

/// Scan an algebraic polynomial string for exponents.
fn scan_exponents(spec: &str) -> Result<BTreeSet<usize>> {
    let mut exponents = BTreeSet::new();

    for caps in term_pattern().captures_iter(spec) {
        if let Some(exp) = caps.get(1) {
            // x^<exp> term
            let token = exp.as_str();
            let parsed: usize = token.parse().map_err(|_| PolynomialError::InvalidExponent {
                token: token.to_string(),
            })?;
            exponents.insert(parsed);
        } else if caps.get(2).is_some() {
            // bare integer constant
            exponents.insert(0);
        }
        // bare `x` terms are handled below, coalesced into a single exponent
    }

    if spec.contains('x') {
        exponents.insert(1);
    }

    if exponents.is_empty() {
        return Err(PolynomialError::Empty.into());
    }

    Ok(exponents)
}

/// Build the generator word from an exponent set.
///
/// Word length is max exponent + 1; bit `(length - 1 - exp)` is `1` for every
/// exponent present.
fn word_from_exponents(exponents: &BTreeSet<usize>) -> String {
    let max = *exponents.iter().next_back().unwrap_or(&0);
    let length = max + 1;
    let mut word = vec![b'0'; length];
    for &exp in exponents {
        word[length - 1 - exp] = b'1';
    }
    String::from_utf8(word).expect("word is ASCII")
}
