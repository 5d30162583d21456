#![no_main]

use libfuzzer_sys::fuzz_target;
use ecvrf_p256::{proof_to_hash, SecretKey, KeyPair, PROOF_LEN};

fuzz_target!(|data: &[u8]| {
    // Fixed key; the fuzzer controls proof bytes and message
    let Ok(secret) = SecretKey::from_bytes(&[0x42u8; 32]) else { return; };
    let keys = KeyPair::from_secret(secret);

    let split = data.len().min(PROOF_LEN);
    let (proof, message) = data.split_at(split);

    // An arbitrary proof must not verify
    assert!(proof_to_hash(keys.public(), message, proof).is_err());
});
