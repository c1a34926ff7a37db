//! Solution verification and statistics.

mod verifier;

pub use verifier::LedgerVerifier;
