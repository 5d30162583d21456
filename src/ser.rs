use p256::{
    elliptic_curve::{
        sec1::{FromEncodedPoint, ToEncodedPoint},
        PrimeField,
    },
    AffinePoint, EncodedPoint, FieldBytes, Scalar,
};

use crate::{errors::VrfError, types::{POINT_LEN, SCALAR_LEN}};

/// Try-and-increment counter prefix.
#[inline]
#[must_use]
pub const fn be32(x: u32) -> [u8; 4] {
    x.to_be_bytes()
}

/// Fixed-width big-endian scalar encoding.
#[must_use]
pub fn encode_scalar(s: &Scalar) -> [u8; SCALAR_LEN] {
    let mut out = [0u8; SCALAR_LEN];
    out.copy_from_slice(&s.to_repr());
    out
}

/// Decode a canonical big-endian scalar; `None` if the value is not below the group order.
#[must_use]
pub fn decode_scalar(b: &[u8; SCALAR_LEN]) -> Option<Scalar> {
    Scalar::from_repr(FieldBytes::from(*b)).into()
}

/// Uncompressed SEC1 encoding: 0x04 || x || y.
///
/// # Errors
/// Returns `VrfError::PointAtInfinity` for the identity.
pub fn encode_point(p: &AffinePoint) -> Result<[u8; POINT_LEN], VrfError> {
    let ep = p.to_encoded_point(false);
    let bytes = ep.as_bytes();
    if bytes.len() != POINT_LEN {
        return Err(VrfError::PointAtInfinity);
    }
    let mut out = [0u8; POINT_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Decode an uncompressed point; off-curve coordinates and the identity are rejected.
///
/// # Errors
/// Returns `VrfError::InvalidPoint` on any malformed or off-curve input.
pub fn decode_point(b: &[u8]) -> Result<AffinePoint, VrfError> {
    if b.len() != POINT_LEN {
        return Err(VrfError::InvalidPoint);
    }
    let ep = EncodedPoint::from_bytes(b).map_err(|_| VrfError::InvalidPoint)?;
    let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&ep).into();
    match point {
        Some(p) if p != AffinePoint::IDENTITY => Ok(p),
        _ => Err(VrfError::InvalidPoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const G_X: [u8; 32] = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    const G_Y: [u8; 32] = hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

    #[test]
    fn counter_is_big_endian() {
        assert_eq!(be32(0), [0, 0, 0, 0]);
        assert_eq!(be32(1), [0, 0, 0, 1]);
        assert_eq!(be32(0x0102_0304), [1, 2, 3, 4]);
    }

    #[test]
    fn generator_encoding_is_uncompressed_sec1() {
        let enc = encode_point(&AffinePoint::GENERATOR).unwrap();
        assert_eq!(enc[0], 0x04);
        assert_eq!(&enc[1..33], &G_X);
        assert_eq!(&enc[33..], &G_Y);
        assert_eq!(decode_point(&enc).unwrap(), AffinePoint::GENERATOR);
    }

    #[test]
    fn identity_has_no_encoding() {
        assert_eq!(encode_point(&AffinePoint::IDENTITY), Err(VrfError::PointAtInfinity));
    }

    #[test]
    fn off_curve_point_is_rejected() {
        let mut enc = encode_point(&AffinePoint::GENERATOR).unwrap();
        enc[64] ^= 1;
        assert_eq!(decode_point(&enc), Err(VrfError::InvalidPoint));
    }

    #[test]
    fn wrong_tag_or_length_is_rejected() {
        let mut enc = encode_point(&AffinePoint::GENERATOR).unwrap();
        assert_eq!(decode_point(&enc[..33]), Err(VrfError::InvalidPoint));
        enc[0] = 0x02;
        assert_eq!(decode_point(&enc), Err(VrfError::InvalidPoint));
        assert_eq!(decode_point(&[0u8; POINT_LEN]), Err(VrfError::InvalidPoint));
    }

    #[test]
    fn scalar_encoding_is_fixed_width_big_endian() {
        let one = encode_scalar(&Scalar::ONE);
        assert_eq!(one[31], 1);
        assert!(one[..31].iter().all(|&b| b == 0));
        assert_eq!(decode_scalar(&one), Some(Scalar::ONE));
    }

    #[test]
    fn scalar_at_or_above_order_is_not_canonical() {
        let n = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
        assert_eq!(decode_scalar(&n), None);
        assert_eq!(decode_scalar(&[0xff; 32]), None);
        let n_minus_one = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550");
        assert_eq!(decode_scalar(&n_minus_one), Some(-Scalar::ONE));
    }
}
