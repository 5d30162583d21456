use crate::{
    errors::VrfError,
    keys::PublicKey,
    types::{Evaluation, VrfIndex, VrfProof},
};

pub trait Vrf {
    /// Generate a VRF proof for the given input message.
    /// Returns the index, the 129-byte proof and the output point.
    ///
    /// # Errors
    /// Returns `VrfError` if proof generation fails
    fn prove(&self, alpha: &[u8]) -> Result<Evaluation, VrfError>;

    /// Verify proof π on input message `alpha` under the VRF public key.
    /// Returns the 32-byte index if (and only if) verification succeeds.
    ///
    /// # Errors
    /// Returns `VrfError` if the proof does not verify
    fn verify(&self, alpha: &[u8], proof: &VrfProof) -> Result<VrfIndex, VrfError>;

    /// Get the public key associated with this VRF instance
    fn public_key(&self) -> PublicKey;
}
