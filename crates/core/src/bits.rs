//! Payload text to bit-string encoding.
//!
//! The division engine works on strings of `0`/`1` characters, so payloads
//! arrive here first. A payload that is already binary passes through
//! unchanged; anything else is encoded byte by byte.
//!
//! # Encoding Rules
//! - Already-binary payloads are returned verbatim: `"101"` stays `"101"`,
//!   even though it could also be read as text digits
//! - Otherwise every byte of the payload's UTF-8 encoding becomes its 8-bit
//!   binary form, zero-padded, most-significant bit first, concatenated in
//!   original order

use crate::polynomial::is_binary;

/// Encode a payload into a bit string. Never fails.
///
/// # Example
/// ```
/// use crc_sim_core::bits::to_bits;
///
/// assert_eq!(to_bits("A"), "01000001");
/// assert_eq!(to_bits("101"), "101");
/// ```
pub fn to_bits(payload: &str) -> String {
    if is_binary(payload) {
        return payload.to_string();
    }

    let mut out = String::with_capacity(payload.len() * 8);
    for byte in payload.bytes() {
        out.push_str(&format!("{byte:08b}"));
    }
    out
}
