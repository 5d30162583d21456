#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! ECVRF over NIST P-256
//!
//! A verifiable random function: a secret key maps a message to a pseudorandom
//! 32-byte index together with a proof that anyone holding the public key can check.
//! The proof is a Fiat-Shamir discrete-log-equality proof that
//! `log_G(pk) == log_H(output)` with `H = H1(message)`.

// Fixed cryptographic choices:
// - Curve: NIST P-256, points encoded uncompressed (65 bytes)
// - H1: SHA-512 try-and-increment, even-y recovery, at most 100 attempts
// - H2: SHA-512 try-and-increment onto [1, n - 1]
// - Index: SHA-256 of the encoded output point
// - Proof: c (32 BE) || s (32 BE) || output (65) = 129 bytes
//
// Byte layouts are fixed; changing any of them breaks interoperability with
// existing proofs.

// Core modules
pub mod types;
pub mod errors;
pub mod ser;
pub mod hashers;
pub mod keys;
pub mod nonce;
pub mod prover;
pub mod verifier;
pub mod vrf;
pub mod ecvrf_p256;

// Re-export commonly used types and functions
pub use types::*;
pub use errors::VrfError;
pub use keys::{generate_key, KeyPair, PublicKey, SecretKey};
pub use nonce::{NonceSource, OsNonce, RngNonce};
pub use prover::{evaluate, evaluate_series, evaluate_with, series, Series, SeriesItem};
pub use verifier::{proof_to_hash, verify_proof};
pub use hashers::{hash_to_point, hash_to_scalar};
pub use vrf::Vrf;
pub use ecvrf_p256::{EcVrfP256, VrfVerifier};

// Version and protocol constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROTOCOL_VERSION: u32 = 1;
