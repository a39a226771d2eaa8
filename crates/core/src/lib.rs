//! crc-sim-core: Educational CRC engine with arbitrary generator polynomials
//!
//! This library provides the core components for a learning-focused system that:
//! - Parses generator polynomials given algebraically (`x^4+x+1`) or as raw
//!   binary strings (`10011`)
//! - Encodes payload text into a bit sequence
//! - Performs modulo-2 long division in explicit shift-register form,
//!   producing a checksum and a step-by-step trace
//! - Verifies received frames by appending the checksum and re-dividing
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `polynomial`: Generator polynomial parsing and binary conversion
//! - `bits`: Payload text to bit-string encoding
//! - `division`: Modulo-2 long division with step tracing
//! - `engine`: The encode/verify protocol invoked once per request
//! - `corruption`: Corruption scenarios for demos and tests
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Stateless**: Each call owns its inputs and returns its trace; there is
//!   no shared mutable state between invocations
//! - **Observable**: Every division returns a human-readable step trace
//! - **Self-consistent**: Encode and verify use the identical stepping rule,
//!   so a clean round-trip always produces an all-zero check remainder

pub mod bits;
pub mod corruption;
pub mod division;
pub mod engine;
pub mod error;
pub mod polynomial;

// Re-export commonly used types
pub use error::{Error, Result};
pub use polynomial::Generator;
