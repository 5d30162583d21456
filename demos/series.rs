//! Derive one VRF draw per item from a seed (for example a block hash) and
//! print the index of each, the way a loot table would consume them.

use ecvrf_p256::{evaluate_series, generate_key, verify_proof};

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let keys = generate_key();
    let seed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054".to_string());

    let items = match evaluate_series(keys.secret(), seed.as_bytes(), 10) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("evaluation failed: {e}");
            std::process::exit(1);
        }
    };

    for item in &items {
        let ok = verify_proof(keys.public(), &item.message, &item.evaluation.proof).is_ok();
        println!(
            "#{:>2} {} verified={ok}",
            item.counter,
            item.evaluation.index,
        );
    }
}
