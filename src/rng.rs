//! Randomness for decorative effects. Not for anything that needs to be secure.

/// Uniform float in `[0, 1)`.
#[cfg(feature = "rng")]
pub fn unit() -> f64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => bits_to_unit(u64::from_le_bytes(buf)),
        Err(err) => {
            log::debug!("getrandom failed ({err}), using clock mix");
            clock_unit()
        }
    }
}

#[cfg(not(feature = "rng"))]
pub fn unit() -> f64 {
    clock_unit()
}

/// Uniform float in `[lo, hi)`.
pub fn range(lo: f64, hi: f64) -> f64 {
    lo + unit() * (hi - lo)
}

// Top 53 bits give every representable step in [0, 1).
fn bits_to_unit(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

fn clock_unit() -> f64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    let mixed = ((now * 1000.0) as u64)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    bits_to_unit(mixed)
}
