//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `memochat_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any
    // presentation-layer runtime setup.
    println!("memochat_core ping={}", memochat_core::ping());
    println!("memochat_core version={}", memochat_core::core_version());
}
