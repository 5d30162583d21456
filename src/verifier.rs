use p256::{ProjectivePoint, Scalar};
use subtle::ConstantTimeEq;

use crate::{
    errors::VrfError,
    hashers::{challenge, compute_index, hash_to_point},
    keys::PublicKey,
    ser::{decode_point, decode_scalar, encode_point},
    types::{VrfIndex, VrfProof, POINT_LEN, SCALAR_LEN},
};

fn read_scalar(b: &[u8]) -> Result<Scalar, VrfError> {
    let mut arr = [0u8; SCALAR_LEN];
    arr.copy_from_slice(b);
    decode_scalar(&arr).ok_or(VrfError::InvalidProof)
}

/// Verify raw proof bytes and return the VRF index.
///
/// # Errors
/// - `InvalidProofLength` if `proof` is not exactly 129 bytes (checked before any decoding)
/// - `InvalidPoint` if the embedded output is not a point on the curve
/// - `InvalidProof` if a scalar is non-canonical or the recomputed challenge differs
pub fn proof_to_hash(public: &PublicKey, message: &[u8], proof: &[u8]) -> Result<VrfIndex, VrfError> {
    let proof = VrfProof::try_from(proof)?;
    verify_proof(public, message, &proof)
}

/// Verify a length-checked proof.
///
/// U' = s·G + c·pk and V' = s·H + c·output equal r·G and r·H exactly when the
/// prover knew sk, so H2 over them reproduces c.
///
/// # Errors
/// See [`proof_to_hash`].
#[tracing::instrument(target = "ecvrf", level = "debug", skip_all, fields(message_len = message.len()))]
pub fn verify_proof(public: &PublicKey, message: &[u8], proof: &VrfProof) -> Result<VrfIndex, VrfError> {
    let output = decode_point(proof.output_bytes())
        .inspect_err(|_| tracing::debug!(target: "ecvrf", "rejected: output is not a curve point"))?;

    let (Ok(c), Ok(s)) = (read_scalar(proof.challenge_bytes()), read_scalar(proof.response_bytes())) else {
        tracing::debug!(target: "ecvrf", "rejected: non-canonical scalar");
        return Err(VrfError::InvalidProof);
    };

    let h = hash_to_point(message)?;

    let u = (ProjectivePoint::GENERATOR * s + ProjectivePoint::from(*public.as_affine()) * c).to_affine();
    let v = (ProjectivePoint::from(h) * s + ProjectivePoint::from(output) * c).to_affine();

    let expected = match challenge(&h, public.as_affine(), &output, &u, &v) {
        Ok(c) => c,
        Err(VrfError::PointAtInfinity) => {
            tracing::debug!(target: "ecvrf", "rejected: commitment at infinity");
            return Err(VrfError::InvalidProof);
        }
        Err(e) => return Err(e),
    };

    if !bool::from(expected.ct_eq(&c)) {
        tracing::debug!(target: "ecvrf", "rejected: challenge mismatch");
        return Err(VrfError::InvalidProof);
    }

    let mut encoded = [0u8; POINT_LEN];
    encoded.copy_from_slice(proof.output_bytes());
    debug_assert_eq!(Ok(encoded), encode_point(&output));
    Ok(compute_index(&encoded))
}
