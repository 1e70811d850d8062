use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Cache-busting value: the prefix followed by the digits of a random fraction.
pub fn random_val(prefix: &str) -> String {
    let digits: u64 = rand::rng().random_range(1..10_000_000_000_000_000);
    format!("{prefix}{digits}")
}

/// Numeric guid accepted by the vkey service.
pub fn uid() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_millis() as u64)
        .unwrap_or(0);

    let seed = (2_147_483_647f64 * rand::rng().random::<f64>()).round() as u64;

    (seed * millis % 10_000_000_000).to_string()
}
