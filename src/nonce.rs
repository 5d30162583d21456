//! Source of the prover's ephemeral scalar `r`.
//!
//! Every proof consumes exactly one nonce. Reusing a nonce across two proofs
//! under the same key reveals the key, so implementations must never repeat.

use p256::NonZeroScalar;
use rand_core::{CryptoRngCore, OsRng};

pub trait NonceSource {
    /// Draw a fresh uniformly random scalar in [1, n).
    fn next_nonce(&mut self) -> NonZeroScalar;
}

/// Operating-system CSPRNG; safe to use from any thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonce;

impl NonceSource for OsNonce {
    fn next_nonce(&mut self) -> NonZeroScalar {
        NonZeroScalar::random(&mut OsRng)
    }
}

/// Adapter over a caller-supplied cryptographic RNG.
#[derive(Debug)]
pub struct RngNonce<R>(pub R);

impl<R: CryptoRngCore> NonceSource for RngNonce<R> {
    fn next_nonce(&mut self) -> NonZeroScalar {
        NonZeroScalar::random(&mut self.0)
    }
}
