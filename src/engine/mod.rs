//! Month reconstruction entry point.
//!
//! - [`LedgerEngine`]: normalize, build the month timeline, walk, verify
//! - [`ReconstructionRequest`] / [`Reconstruction`]: serializable input and output

mod ledger_engine;
mod request;

pub use ledger_engine::LedgerEngine;
pub use request::{Reconstruction, ReconstructionRequest};
