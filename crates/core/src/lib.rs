//! # hashchain core
//!
//! An append-only, in-memory ledger where every record is bound to its
//! predecessor by a SHA-256 identity and admitted through a proof-of-work
//! gate.
//!
//! ## Model
//!
//! - **Record**: `sequence`, `created_at`, `payload`, `previous`, `nonce` and
//!   the `identity` derived from them
//! - **Chain**: records in insertion order, starting with a mined root whose
//!   `previous` is [`Digest::ZERO`]
//! - **Gate**: a record is admitted once its hex identity starts with
//!   `difficulty` zeros (default 2)
//!
//! Changing any field of a historical record changes its identity, which
//! breaks the `previous` link of every record after it. Re-legitimizing the
//! chain means re-mining every downstream record.
//!
//! ## Example
//!
//! ```rust
//! use hashchain_core::{Chain, Difficulty};
//!
//! let mut chain = Chain::with_difficulty(Difficulty::new(1).unwrap());
//! chain.append("Block 1 Data");
//! chain.append("Block 2 Data");
//!
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.records()[2].previous(), chain.records()[1].identity());
//! assert!(chain.verify().is_ok());
//! ```
//!
//! ## Concurrency
//!
//! [`Chain`] needs `&mut self` to append, so a single writer is enforced at
//! compile time. [`SharedChain`] serializes appends from many threads.

mod chain;
mod digest;
mod error;
mod params;
mod pow;
mod record;
mod shared;

pub use chain::{Chain, verify_records};
pub use digest::Digest;
pub use error::{Error, Result};
pub use params::*;
pub use pow::{Difficulty, MiningStats, meets_difficulty, mine, mine_bounded};
pub use record::{Candidate, Record, derive_identity};
pub use shared::SharedChain;
