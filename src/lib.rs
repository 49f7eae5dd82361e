//! hashchain
//!
//! An append-only, hash-chained ledger with a proof-of-work admission gate,
//! plus the configuration, logging and record rendering used by the
//! `hashchain` command-line tool.
//!
//! # Overview
//!
//! Every record carries the identity of its predecessor. A record is only
//! admitted once its SHA-256 identity starts with the configured number of
//! zero hex characters, so rewriting history means re-mining every record
//! after the one that changed.
//!
//! # Example
//!
//! ```rust
//! use hashchain::ledger::{Chain, Difficulty};
//! use hashchain::report::render_text;
//!
//! let mut chain = Chain::with_difficulty(Difficulty::new(1).unwrap());
//! chain.append("Block 1 Data");
//!
//! assert!(chain.verify().is_ok());
//! assert!(render_text(chain.records()).contains("Payload: Block 1 Data"));
//! ```

// Re-export the core ledger
pub use hashchain_core as ledger;

pub mod config;
pub mod logging;
pub mod report;

// Convenience re-exports
pub use ledger::{Chain, Difficulty, Digest, Record, SharedChain};
