//! Keyed ECVRF-P256 instances.
//! Provides the prover/verifier pair behind the `Vrf` trait plus a verify-only handle.

use rand_core::CryptoRngCore;

use crate::{
    errors::VrfError,
    keys::{KeyPair, PublicKey, SecretKey},
    prover::evaluate,
    types::{Evaluation, VrfIndex, VrfProof, SCALAR_LEN},
    verifier::verify_proof,
    vrf::Vrf,
};

/// VRF instance holding a key pair; proves and verifies.
#[derive(Clone, Debug)]
pub struct EcVrfP256 {
    keys: KeyPair,
}

impl EcVrfP256 {
    /// Generate a new VRF keypair
    #[must_use]
    pub fn new() -> Self {
        Self { keys: KeyPair::random() }
    }

    #[must_use]
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        Self { keys: KeyPair::generate(rng) }
    }

    #[must_use]
    pub const fn from_key_pair(keys: KeyPair) -> Self {
        Self { keys }
    }

    /// Create a new VRF instance from secret key bytes
    ///
    /// # Errors
    /// Returns `VrfError::InvalidSecretKey` if the bytes are zero or not below the group order
    pub fn from_secret_bytes(secret_bytes: &[u8; SCALAR_LEN]) -> Result<Self, VrfError> {
        let secret = SecretKey::from_bytes(secret_bytes)?;
        Ok(Self::from_key_pair(KeyPair::from_secret(secret)))
    }

    /// Get the secret key bytes
    #[must_use]
    pub fn secret_key_bytes(&self) -> [u8; SCALAR_LEN] {
        self.keys.secret().to_bytes()
    }

    #[must_use]
    pub const fn key_pair(&self) -> &KeyPair {
        &self.keys
    }
}

impl Default for EcVrfP256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Vrf for EcVrfP256 {
    fn prove(&self, alpha: &[u8]) -> Result<Evaluation, VrfError> {
        evaluate(self.keys.secret(), alpha)
    }

    fn verify(&self, alpha: &[u8], proof: &VrfProof) -> Result<VrfIndex, VrfError> {
        verify_proof(self.keys.public(), alpha, proof)
    }

    fn public_key(&self) -> PublicKey {
        *self.keys.public()
    }
}

/// Verification-only handle around a public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VrfVerifier {
    public: PublicKey,
}

impl VrfVerifier {
    #[must_use]
    pub const fn new(public: PublicKey) -> Self {
        Self { public }
    }

    /// # Errors
    /// Returns `VrfError::InvalidPublicKey` if the bytes are not a valid SEC1 point
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        PublicKey::from_sec1_bytes(bytes).map(Self::new)
    }

    /// # Errors
    /// Returns `VrfError` if the proof is malformed or does not verify
    pub fn verify(&self, alpha: &[u8], proof: &VrfProof) -> Result<VrfIndex, VrfError> {
        verify_proof(&self.public, alpha, proof)
    }

    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

impl From<&EcVrfP256> for VrfVerifier {
    fn from(vrf: &EcVrfP256) -> Self {
        Self::new(vrf.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PROOF_LEN;
    use rand_core::OsRng;

    #[test]
    fn test_vrf_prove_and_verify() {
        let vrf = EcVrfP256::new();
        let input = b"test message";

        let ev = vrf.prove(input).expect("Proving should succeed");
        let index = vrf.verify(input, &ev.proof).expect("Verification should succeed");

        assert_eq!(ev.index, index);
    }

    #[test]
    fn test_vrf_generate_with_caller_rng() {
        let vrf = EcVrfP256::generate(&mut OsRng);
        let other = EcVrfP256::generate(&mut OsRng);
        assert_ne!(vrf.public_key(), other.public_key());

        let ev = vrf.prove(b"rng").unwrap();
        assert_eq!(vrf.verify(b"rng", &ev.proof), Ok(ev.index));
        assert!(other.verify(b"rng", &ev.proof).is_err());
    }

    #[test]
    fn test_vrf_deterministic_output() {
        let vrf_original = EcVrfP256::new();
        let secret_bytes = vrf_original.secret_key_bytes();

        let vrf1 = EcVrfP256::from_secret_bytes(&secret_bytes).unwrap();
        let vrf2 = EcVrfP256::from_secret_bytes(&secret_bytes).unwrap();

        let input = b"deterministic test";

        let ev1 = vrf1.prove(input).unwrap();
        let ev2 = vrf2.prove(input).unwrap();

        // Same key: same output, fresh nonce per proof
        assert_eq!(ev1.index, ev2.index);
        assert_eq!(ev1.output, ev2.output);
        assert_ne!(ev1.proof, ev2.proof);
        assert_eq!(ev1.proof.output_bytes(), ev2.proof.output_bytes());
    }

    #[test]
    fn test_vrf_different_inputs() {
        let vrf = EcVrfP256::new();

        let ev1 = vrf.prove(b"message 1").unwrap();
        let ev2 = vrf.prove(b"message 2").unwrap();

        assert_ne!(ev1.proof, ev2.proof);
        assert_ne!(ev1.index, ev2.index);
    }

    #[test]
    fn test_verifier_handle_matches_instance() {
        let vrf = EcVrfP256::new();
        let verifier = VrfVerifier::from_sec1_bytes(&vrf.public_key().to_bytes()).unwrap();
        assert_eq!(verifier, VrfVerifier::from(&vrf));

        let ev = vrf.prove(b"handle").unwrap();
        assert_eq!(verifier.verify(b"handle", &ev.proof), Ok(ev.index));
    }

    #[test]
    fn test_edge_case_proofs() {
        let vrf = EcVrfP256::new();
        let input = b"test input";

        let all_zeros = VrfProof([0u8; PROOF_LEN]);
        let all_ones = VrfProof([0xFFu8; PROOF_LEN]);
        let alternating = {
            let mut proof = [0u8; PROOF_LEN];
            for (i, item) in proof.iter_mut().enumerate() {
                *item = if i % 2 == 0 { 0xAA } else { 0x55 };
            }
            VrfProof(proof)
        };

        assert_eq!(vrf.verify(input, &all_zeros), Err(VrfError::InvalidPoint));
        assert_eq!(vrf.verify(input, &all_ones), Err(VrfError::InvalidPoint));
        assert!(vrf.verify(input, &alternating).is_err());
    }

    #[test]
    fn test_proof_bit_flip_rejection() {
        let vrf = EcVrfP256::new();
        let input = b"test input";
        let ev = vrf.prove(input).unwrap();

        for bit_pos in [0, 1, 7, 8, 255, 256, 511, 512, 520, 1031] {
            let mut flipped = ev.proof;
            flipped.0[bit_pos / 8] ^= 1 << (bit_pos % 8);
            assert!(vrf.verify(input, &flipped).is_err(), "bit {bit_pos} accepted");
        }
    }
}
