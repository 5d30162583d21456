//! Generate a key pair, prove a message and verify the proof.
//!
//! Logs at DEBUG so the `ecvrf` spans are visible.

use ecvrf_p256::{generate_key, proof_to_hash, Vrf, VrfVerifier, EcVrfP256, SUITE_NAME};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    println!("=== {SUITE_NAME} ===\n");

    let keys = generate_key();
    println!("Public key (hex):  {}", keys.public().to_hex());
    println!("Private key (hex): {}", keys.secret().to_hex());

    let vrf = EcVrfP256::from_key_pair(keys);
    let message = b"test-message";

    let ev = match vrf.prove(message) {
        Ok(ev) => ev,
        Err(e) => {
            eprintln!("proving failed: {e}");
            std::process::exit(1);
        }
    };
    println!("\nIndex (hex): {}", ev.index);
    println!("Proof (hex): {}", ev.proof.to_hex());

    let verifier = VrfVerifier::from(&vrf);
    match verifier.verify(message, &ev.proof) {
        Ok(index) => println!("\nVerified, index matches: {}", index == ev.index),
        Err(e) => println!("\nVerification failed: {e}"),
    }

    let mut forged = *ev.proof.as_bytes();
    forged[0] ^= 0x80;
    match proof_to_hash(verifier.public_key(), message, &forged) {
        Ok(_) => println!("Forged proof accepted (unexpected)"),
        Err(e) => println!("Forged proof rejected: {e}"),
    }
}
