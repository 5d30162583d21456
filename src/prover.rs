use p256::{ProjectivePoint, Scalar};

use crate::{
    errors::VrfError,
    hashers::{challenge, compute_index, hash_to_point},
    keys::SecretKey,
    nonce::{NonceSource, OsNonce},
    ser::{encode_point, encode_scalar},
    types::{Evaluation, VrfProof, PROOF_LEN, SCALAR_LEN},
};

/// Evaluate the VRF on `message`, drawing the proof nonce from the OS RNG.
///
/// # Errors
/// Only fails if hashing to the curve is exhausted, which indicates a broken
/// hash/curve pairing and must be treated as fatal.
pub fn evaluate(secret: &SecretKey, message: &[u8]) -> Result<Evaluation, VrfError> {
    evaluate_with(secret, message, &mut OsNonce)
}

/// Evaluate the VRF with an explicit nonce source.
///
/// Steps: H = H1(m) → output = sk·H → (U, V) = (r·G, r·H) → c = H2(G, H, pk, output, U, V)
/// → s = r − c·sk → π = c ‖ s ‖ output, index = SHA256(output).
///
/// # Errors
/// See [`evaluate`].
#[tracing::instrument(target = "ecvrf", level = "debug", skip_all, fields(message_len = message.len()))]
pub fn evaluate_with<N: NonceSource + ?Sized>(
    secret: &SecretKey,
    message: &[u8],
    nonce: &mut N,
) -> Result<Evaluation, VrfError> {
    let sk: &Scalar = secret.as_scalar();
    let pk = secret.public_key();

    let h = hash_to_point(message)?;
    let h_proj = ProjectivePoint::from(h);

    let output = (h_proj * sk).to_affine();
    let output_bytes = encode_point(&output)?;

    let r = nonce.next_nonce();
    let u = (ProjectivePoint::GENERATOR * *r).to_affine();
    let v = (h_proj * *r).to_affine();

    let c = challenge(&h, pk.as_affine(), &output, &u, &v)?;
    let s = *r - c * sk;

    let mut proof = [0u8; PROOF_LEN];
    proof[..SCALAR_LEN].copy_from_slice(&encode_scalar(&c));
    proof[SCALAR_LEN..2 * SCALAR_LEN].copy_from_slice(&encode_scalar(&s));
    proof[2 * SCALAR_LEN..].copy_from_slice(&output_bytes);

    let index = compute_index(&output_bytes);
    tracing::debug!(target: "ecvrf", index = %index, "vrf evaluated");

    Ok(Evaluation { index, proof: VrfProof(proof), output })
}

/// One element of a derived series.
#[derive(Clone, Debug)]
pub struct SeriesItem {
    pub counter: u32,
    pub message: Vec<u8>,
    pub evaluation: Evaluation,
}

/// Lazy `seed || hex(i)` evaluations for i = 0, 1, 2, ... up to `u32::MAX`.
///
/// Items are computed on demand, so callers can stop early without paying for
/// the rest of the range.
#[derive(Clone, Debug)]
pub struct Series<'a> {
    secret: &'a SecretKey,
    seed: &'a [u8],
    next: Option<u32>,
}

/// Start a lazy series over `seed`.
#[must_use]
pub const fn series<'a>(secret: &'a SecretKey, seed: &'a [u8]) -> Series<'a> {
    Series { secret, seed, next: Some(0) }
}

impl Iterator for Series<'_> {
    type Item = Result<SeriesItem, VrfError>;

    fn next(&mut self) -> Option<Self::Item> {
        let counter = self.next?;
        self.next = counter.checked_add(1);

        let mut message = Vec::with_capacity(self.seed.len() + 8);
        message.extend_from_slice(self.seed);
        message.extend_from_slice(format!("{counter:x}").as_bytes());
        Some(evaluate(self.secret, &message).map(|evaluation| SeriesItem { counter, message, evaluation }))
    }
}

/// Evaluate `seed || hex(i)` for i in 0..count, e.g. one draw per item from a block hash.
///
/// The result grows as items are produced; nothing is reserved up front from `count`.
///
/// # Errors
/// Propagates the first evaluation failure.
pub fn evaluate_series(secret: &SecretKey, seed: &[u8], count: u32) -> Result<Vec<SeriesItem>, VrfError> {
    series(secret, seed).take(count as usize).collect()
}
