use core::fmt;

use p256::AffinePoint;

use crate::{errors::VrfError, ser::encode_point};

pub const SUITE_NAME: &str = "ECVRF-P256-SHA512-TAI-KT";
pub const SCALAR_LEN: usize = 32;                               // BE scalar, byte length of the group order
pub const POINT_LEN: usize = 1 + 2 * SCALAR_LEN;                // 0x04 || x || y
pub const PROOF_LEN: usize = 2 * SCALAR_LEN + POINT_LEN;        // c || s || output = 129
pub const INDEX_LEN: usize = 32;                                // SHA-256(output)
pub const H1_MAX_ATTEMPTS: u32 = 100;                           // try-and-increment bound
pub const TRANSCRIPT_LEN: usize = 6 * POINT_LEN;                // G, H, pk, output, U, V

// Fixed-size newtypes prevent misuse
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)] pub struct VrfProof(pub [u8; PROOF_LEN]);
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)] pub struct VrfIndex(pub [u8; INDEX_LEN]);

// Exact-sized decode helpers
macro_rules! impl_tryfrom_slice {
    ($t:ty, $len:expr, $err:expr) => {
        impl TryFrom<&[u8]> for $t {
            type Error = VrfError;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                if b.len() != $len {
                    return Err($err(b.len()));
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(b);
                Ok(Self(arr))
            }
        }
    }
}
impl_tryfrom_slice!(VrfProof, PROOF_LEN, |got| VrfError::InvalidProofLength { expected: PROOF_LEN, got });
impl_tryfrom_slice!(VrfIndex, INDEX_LEN, |_| VrfError::DecodeError("index must be 32 bytes"));

impl VrfProof {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PROOF_LEN] {
        &self.0
    }

    /// Fiat-Shamir challenge `c`, big-endian.
    #[must_use]
    pub fn challenge_bytes(&self) -> &[u8] {
        &self.0[..SCALAR_LEN]
    }

    /// Response `s = r - c * sk`, big-endian.
    #[must_use]
    pub fn response_bytes(&self) -> &[u8] {
        &self.0[SCALAR_LEN..2 * SCALAR_LEN]
    }

    /// Uncompressed encoding of the VRF output point.
    #[must_use]
    pub fn output_bytes(&self) -> &[u8] {
        &self.0[2 * SCALAR_LEN..]
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// # Errors
    /// Returns `VrfError::DecodeError` for malformed hex and
    /// `VrfError::InvalidProofLength` if the decoded bytes are not 129 long.
    pub fn from_hex(s: &str) -> Result<Self, VrfError> {
        let raw = hex::decode(s.trim()).map_err(|_| VrfError::DecodeError("invalid proof hex"))?;
        Self::try_from(raw.as_slice())
    }
}

impl VrfIndex {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; INDEX_LEN] {
        &self.0
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for VrfProof {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for VrfIndex {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for VrfProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VrfProof({})", self.to_hex())
    }
}

impl fmt::Debug for VrfIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VrfIndex({})", self.to_hex())
    }
}

impl fmt::Display for VrfIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Result of a single VRF evaluation.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// SHA-256 of the encoded output point; the value consumers treat as random.
    pub index: VrfIndex,
    pub proof: VrfProof,
    /// `sk * H1(message)`
    pub output: AffinePoint,
}

impl Evaluation {
    /// # Errors
    /// Returns `VrfError::PointAtInfinity` if `output` is the identity, which
    /// `evaluate` never produces.
    pub fn output_bytes(&self) -> Result<[u8; POINT_LEN], VrfError> {
        encode_point(&self.output)
    }
}
