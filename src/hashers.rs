use p256::{
    elliptic_curve::{
        bigint::{Encoding, U256},
        point::DecompressPoint,
        subtle::Choice,
    },
    AffinePoint, FieldBytes, Scalar,
};
use sha2::{Digest, Sha256, Sha512};

use crate::{
    errors::VrfError,
    ser::{be32, decode_scalar, encode_point},
    types::{H1_MAX_ATTEMPTS, INDEX_LEN, POINT_LEN, SCALAR_LEN, TRANSCRIPT_LEN, VrfIndex},
};

/// Field modulus p = 2^256 - 2^224 + 2^192 + 2^96 - 1
pub const FIELD_MODULUS: U256 =
    U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

/// H1 always recovers the even-y root.
const H1_Y_IS_ODD: u8 = 0;

/// SHA512( BE32(counter) || data ), truncated to the scalar width.
fn counter_digest(counter: u32, data: &[u8]) -> [u8; SCALAR_LEN] {
    let mut h = Sha512::new();
    h.update(be32(counter));
    h.update(data);
    let digest = h.finalize();
    let mut out = [0u8; SCALAR_LEN];
    out.copy_from_slice(&digest[..SCALAR_LEN]);
    out
}

/// Recover the even-y point with x = candidate mod p, if x^3 - 3x + b is a square.
#[must_use]
pub fn candidate_point(candidate: &[u8; SCALAR_LEN]) -> Option<AffinePoint> {
    let mut x = U256::from_be_slice(candidate);
    // candidate < 2^256 < 2p, one subtraction reduces it
    if x >= FIELD_MODULUS {
        x = x.wrapping_sub(&FIELD_MODULUS);
    }
    let x_bytes = FieldBytes::from(x.to_be_bytes());
    AffinePoint::decompress(&x_bytes, Choice::from(H1_Y_IS_ODD)).into()
}

/// H1: try-and-increment hash of an arbitrary message onto the curve.
///
/// # Errors
/// Returns `VrfError::HashToCurveExhausted` if none of the `H1_MAX_ATTEMPTS`
/// counters yields a valid x-coordinate.
pub fn hash_to_point(message: &[u8]) -> Result<AffinePoint, VrfError> {
    for counter in 0..H1_MAX_ATTEMPTS {
        if let Some(point) = candidate_point(&counter_digest(counter, message)) {
            return Ok(point);
        }
        tracing::trace!(target: "ecvrf", counter, "h1 candidate not on curve");
    }
    Err(VrfError::HashToCurveExhausted { attempts: H1_MAX_ATTEMPTS })
}

/// Maps a candidate k to k + 1 when k < n - 1.
#[must_use]
pub fn candidate_scalar(candidate: &[u8; SCALAR_LEN]) -> Option<Scalar> {
    let k = decode_scalar(candidate)?;
    let shifted = k + Scalar::ONE;
    // k == n - 1 wraps to zero
    if shifted == Scalar::ZERO {
        return None;
    }
    Some(shifted)
}

/// H2: hash to a scalar in [1, n - 1].
#[must_use]
pub fn hash_to_scalar(data: &[u8]) -> Scalar {
    let mut counter: u32 = 0;
    loop {
        if let Some(s) = candidate_scalar(&counter_digest(counter, data)) {
            return s;
        }
        tracing::trace!(target: "ecvrf", counter, "h2 candidate out of range");
        counter = counter.wrapping_add(1);
    }
}

/// T = G || H || pk || output || U || V, each point uncompressed.
///
/// # Errors
/// Returns `VrfError::PointAtInfinity` if any point is the identity.
pub fn build_transcript(points: [&AffinePoint; 6]) -> Result<[u8; TRANSCRIPT_LEN], VrfError> {
    let mut out = [0u8; TRANSCRIPT_LEN];
    for (chunk, point) in out.chunks_exact_mut(POINT_LEN).zip(points) {
        chunk.copy_from_slice(&encode_point(point)?);
    }
    Ok(out)
}

/// c = H2(G, H, pk, output, U, V)
///
/// # Errors
/// Returns `VrfError::PointAtInfinity` if any point is the identity.
pub fn challenge(
    h: &AffinePoint,
    pk: &AffinePoint,
    output: &AffinePoint,
    u: &AffinePoint,
    v: &AffinePoint,
) -> Result<Scalar, VrfError> {
    let transcript = build_transcript([&AffinePoint::GENERATOR, h, pk, output, u, v])?;
    Ok(hash_to_scalar(&transcript))
}

/// index = SHA256( encode(output) )
#[must_use]
pub fn compute_index(encoded_output: &[u8; POINT_LEN]) -> VrfIndex {
    let digest = Sha256::digest(encoded_output);
    let mut out = [0u8; INDEX_LEN];
    out.copy_from_slice(&digest);
    VrfIndex(out)
}
