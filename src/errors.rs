use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VrfError {
    /// No counter in the try-and-increment range produced a curve point.
    /// Only reachable with a broken hash/curve pairing; treat as fatal.
    #[error("hash to curve exhausted after {attempts} attempts")]
    HashToCurveExhausted { attempts: u32 },

    #[error("invalid proof length: expected {expected} got {got}")]
    InvalidProofLength { expected: usize, got: usize },

    #[error("invalid curve point")]
    InvalidPoint,

    #[error("point at infinity has no encoding")]
    PointAtInfinity,

    #[error("invalid VRF proof")]
    InvalidProof,

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("decode error: {0}")]
    DecodeError(&'static str),
}
