//! Proof-of-work admission gate
//!
//! A candidate qualifies once its identity starts with `difficulty` zero hex
//! characters. The search is sequential: nonce 0, 1, 2, ... and the first
//! qualifying nonce wins, so for fixed fields the outcome is deterministic.
//! Expected work is roughly `16^difficulty` identity derivations.

use core::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::params::{DEFAULT_DIFFICULTY, MAX_DIFFICULTY};
use crate::record::Candidate;

/// Required number of leading zero hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Every identity qualifies
    pub const NONE: Difficulty = Difficulty(0);

    pub const DEFAULT: Difficulty = Difficulty(DEFAULT_DIFFICULTY);

    pub fn new(zeros: u8) -> Result<Self> {
        if zeros > MAX_DIFFICULTY {
            return Err(Error::DifficultyOutOfRange {
                requested: zeros,
                max: MAX_DIFFICULTY,
            });
        }
        Ok(Self(zeros))
    }

    pub const fn zeros(self) -> u8 {
        self.0
    }

    /// Mean number of identity derivations needed to satisfy this difficulty
    pub fn expected_attempts(self) -> f64 {
        16f64.powi(i32::from(self.0))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(zeros: u8) -> Result<Self> {
        Self::new(zeros)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check if an identity meets the required difficulty
///
/// # Example
///
/// ```rust
/// use hashchain_core::{Difficulty, Digest, meets_difficulty};
///
/// let mut bytes = [0xFFu8; 32];
/// bytes[0] = 0x00;
/// bytes[1] = 0x0A; // hex "000a..." -> 3 leading zeros
/// let identity = Digest::from_bytes(bytes);
///
/// assert!(meets_difficulty(&identity, Difficulty::new(3).unwrap()));
/// assert!(!meets_difficulty(&identity, Difficulty::new(4).unwrap()));
/// ```
#[inline(always)]
pub fn meets_difficulty(identity: &Digest, difficulty: Difficulty) -> bool {
    identity.leading_zero_nibbles() >= u32::from(difficulty.0)
}

/// Work performed while mining one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningStats {
    /// Identities evaluated, including the one computed at construction
    pub attempts: u64,
    pub elapsed: Duration,
}

impl MiningStats {
    /// Identity derivations per second
    pub fn hashrate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.attempts as f64 / secs
    }
}

/// Advance the candidate's nonce until its identity meets `difficulty`.
///
/// Blocks until a qualifying nonce is found; there is no iteration bound.
pub fn mine(candidate: &mut Candidate, difficulty: Difficulty) -> MiningStats {
    let start = Instant::now();
    let mut attempts: u64 = 1;

    while !meets_difficulty(&candidate.identity(), difficulty) {
        candidate.advance_nonce();
        attempts = attempts.wrapping_add(1);
    }

    finish(candidate, attempts, start)
}

/// Like [`mine`], but gives up once `max_attempts` identities were evaluated.
///
/// The identity computed at construction counts as the first attempt, so a
/// budget of 0 admits nothing. On failure the candidate keeps its last nonce
/// and must not be admitted.
pub fn mine_bounded(
    candidate: &mut Candidate,
    difficulty: Difficulty,
    max_attempts: u64,
) -> Result<MiningStats> {
    if max_attempts == 0 {
        return Err(Error::MiningExhausted { attempts: 0 });
    }

    let start = Instant::now();
    let mut attempts: u64 = 1;

    loop {
        if meets_difficulty(&candidate.identity(), difficulty) {
            return Ok(finish(candidate, attempts, start));
        }
        if attempts >= max_attempts {
            debug!(
                sequence = candidate.sequence(),
                attempts, "mining attempt budget exhausted"
            );
            return Err(Error::MiningExhausted { attempts });
        }
        candidate.advance_nonce();
        attempts += 1;
    }
}

fn finish(candidate: &Candidate, attempts: u64, start: Instant) -> MiningStats {
    let stats = MiningStats {
        attempts,
        elapsed: start.elapsed(),
    };

    debug!(
        sequence = candidate.sequence(),
        nonce = candidate.nonce(),
        attempts,
        elapsed_us = stats.elapsed.as_micros() as u64,
        "record mined"
    );

    stats
}
