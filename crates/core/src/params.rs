//! Ledger Parameters
//!
//! Fixed sizes and defaults shared by records, the proof-of-work gate and
//! the chain container.

/// Identity digest size in bytes (SHA-256)
pub const DIGEST_SIZE: usize = 32;

/// Identity digest length when rendered as hex
pub const DIGEST_HEX_LEN: usize = DIGEST_SIZE * 2;

/// Default number of leading zero hex characters an identity must carry
pub const DEFAULT_DIFFICULTY: u8 = 2;

/// Highest satisfiable difficulty (every hex character zero)
pub const MAX_DIFFICULTY: u8 = DIGEST_HEX_LEN as u8;

/// Payload of the root record
pub const GENESIS_PAYLOAD: &[u8] = b"Genesis Block";

/// Sequence number of the root record
pub const GENESIS_SEQUENCE: u64 = 0;
