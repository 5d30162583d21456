#![no_main]

use libfuzzer_sys::fuzz_target;
use ecvrf_p256::{ser::decode_point, PublicKey, VrfProof};

fuzz_target!(|data: &[u8]| {
    // Decoders must reject, never panic
    if let Ok(proof) = VrfProof::try_from(data) {
        let _ = decode_point(proof.output_bytes());
    }
    let _ = PublicKey::from_sec1_bytes(data);
});
