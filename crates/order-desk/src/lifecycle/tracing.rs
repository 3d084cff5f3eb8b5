//! # Logging
//!
//! [`setup_tracing`] installs the global subscriber once at startup. Levels come from
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # placements, serves, payments, reloads
//! RUST_LOG=debug cargo run    # plus every store request and full order payloads
//! ```
//!
//! With `info` a short shift looks like:
//!
//! ```text
//! INFO place_order{code="A001"}: Order placed position=1
//! INFO process_next: Order served code="A001" waiting=0
//! INFO record_payment{code="A001"}: Payment recorded total=9.72
//! WARN place_order{code="A002"}: Order queued without being saved error=order store unavailable: Actor closed
//! ```
//!
//! Store degradation is always logged at `warn`.

/// Compact output without module paths, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
