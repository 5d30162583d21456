use core::fmt;

use p256::{
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
    AffinePoint, EncodedPoint, FieldBytes, NonZeroScalar, ProjectivePoint, Scalar,
};
use rand_core::{CryptoRngCore, OsRng};

use crate::{
    errors::VrfError,
    ser::encode_scalar,
    types::{POINT_LEN, SCALAR_LEN},
};

/// VRF secret key: a non-zero scalar below the group order.
#[derive(Clone)]
pub struct SecretKey(NonZeroScalar);

/// VRF public key: `sk * G`, never the identity.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(AffinePoint);

impl SecretKey {
    #[must_use]
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self(NonZeroScalar::random(rng))
    }

    /// Parse a 32-byte big-endian scalar.
    ///
    /// # Errors
    /// Returns `VrfError::InvalidSecretKey` for zero or values >= n.
    pub fn from_bytes(bytes: &[u8; SCALAR_LEN]) -> Result<Self, VrfError> {
        Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(FieldBytes::from(*bytes)))
            .map(Self)
            .ok_or(VrfError::InvalidSecretKey)
    }

    /// # Errors
    /// Returns `VrfError::DecodeError` for malformed hex, `VrfError::InvalidSecretKey`
    /// if the value is not a valid scalar.
    pub fn from_hex(s: &str) -> Result<Self, VrfError> {
        let mut bytes = [0u8; SCALAR_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|_| VrfError::DecodeError("secret key must be 64 hex characters"))?;
        Self::from_bytes(&bytes)
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        encode_scalar(self.as_scalar())
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    #[must_use]
    pub fn as_scalar(&self) -> &Scalar {
        self.0.as_ref()
    }

    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey((ProjectivePoint::GENERATOR * self.as_scalar()).to_affine())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl PublicKey {
    /// Accepts compressed (33B) or uncompressed (65B) SEC1 encodings.
    ///
    /// # Errors
    /// Returns `VrfError::InvalidPublicKey` for malformed, off-curve or identity encodings.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        let ep = EncodedPoint::from_bytes(bytes).map_err(|_| VrfError::InvalidPublicKey)?;
        let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&ep).into();
        match point {
            Some(p) if p != AffinePoint::IDENTITY => Ok(Self(p)),
            _ => Err(VrfError::InvalidPublicKey),
        }
    }

    /// # Errors
    /// Returns `VrfError::DecodeError` for malformed hex, `VrfError::InvalidPublicKey`
    /// if the bytes are not a valid point.
    pub fn from_hex(s: &str) -> Result<Self, VrfError> {
        let raw = hex::decode(s.trim()).map_err(|_| VrfError::DecodeError("invalid public key hex"))?;
        Self::from_sec1_bytes(&raw)
    }

    /// Uncompressed SEC1 encoding.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        // non-identity points always encode to POINT_LEN bytes
        let ep = self.0.to_encoded_point(false);
        let mut out = [0u8; POINT_LEN];
        out.copy_from_slice(ep.as_bytes());
        out
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    #[must_use]
    pub const fn as_affine(&self) -> &AffinePoint {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// Secret key together with its public key.
#[derive(Clone, Debug)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    #[must_use]
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        Self::from_secret(SecretKey::random(rng))
    }

    /// Fresh key pair from the operating-system RNG.
    #[must_use]
    pub fn random() -> Self {
        Self::generate(&mut OsRng)
    }

    #[must_use]
    pub fn from_secret(secret: SecretKey) -> Self {
        let public = secret.public_key();
        Self { secret, public }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretKey {
        &self.secret
    }

    #[must_use]
    pub const fn public(&self) -> &PublicKey {
        &self.public
    }
}

impl From<SecretKey> for KeyPair {
    fn from(value: SecretKey) -> Self {
        Self::from_secret(value)
    }
}

/// Generate a new VRF key pair.
#[must_use]
pub fn generate_key() -> KeyPair {
    KeyPair::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::encode_point;

    #[test]
    fn public_key_is_secret_times_generator() {
        let sk = SecretKey::from_bytes(&{
            let mut b = [0u8; 32];
            b[31] = 1;
            b
        })
        .unwrap();
        assert_eq!(*sk.public_key().as_affine(), AffinePoint::GENERATOR);
    }

    #[test]
    fn caller_rng_yields_matching_pairs() {
        let sk = SecretKey::random(&mut OsRng);
        let kp = KeyPair::generate(&mut OsRng);
        assert_ne!(sk.to_bytes(), kp.secret().to_bytes());
        assert_eq!(kp.secret().public_key(), *kp.public());
        assert_eq!(KeyPair::from(sk.clone()).public(), &sk.public_key());
    }

    #[test]
    fn zero_and_order_are_rejected() {
        assert_eq!(SecretKey::from_bytes(&[0u8; 32]).err(), Some(VrfError::InvalidSecretKey));
        assert_eq!(SecretKey::from_bytes(&[0xff; 32]).err(), Some(VrfError::InvalidSecretKey));
    }

    #[test]
    fn secret_hex_roundtrip_trims_whitespace() {
        let kp = generate_key();
        let hex_sk = format!("  {}\n", kp.secret().to_hex());
        let sk = SecretKey::from_hex(&hex_sk).unwrap();
        assert_eq!(sk.to_bytes(), kp.secret().to_bytes());
        assert_eq!(sk.public_key(), *kp.public());
        assert!(matches!(SecretKey::from_hex("abc"), Err(VrfError::DecodeError(_))));
    }

    #[test]
    fn public_key_accepts_compressed_and_uncompressed() {
        let kp = generate_key();
        let full = kp.public().to_bytes();
        assert_eq!(full[0], 0x04);
        assert_eq!(full, encode_point(kp.public().as_affine()).unwrap());
        let compressed = kp.public().as_affine().to_encoded_point(true);
        assert_eq!(PublicKey::from_sec1_bytes(compressed.as_bytes()).unwrap(), *kp.public());
        assert_eq!(PublicKey::from_hex(&kp.public().to_hex()).unwrap(), *kp.public());
    }

    #[test]
    fn identity_public_key_is_rejected() {
        assert_eq!(PublicKey::from_sec1_bytes(&[0x00]), Err(VrfError::InvalidPublicKey));
        assert_eq!(PublicKey::from_sec1_bytes(&[0x04; 65]), Err(VrfError::InvalidPublicKey));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = generate_key();
        let rendered = format!("{kp:?}");
        assert!(!rendered.contains(&kp.secret().to_hex()));
        assert!(rendered.contains("SecretKey(..)"));
    }
}
