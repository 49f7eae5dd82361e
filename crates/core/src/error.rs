//! Ledger errors

use thiserror::Error;

use crate::digest::Digest;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("difficulty {requested} is out of range (maximum {max})")]
    DifficultyOutOfRange { requested: u8, max: u8 },

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("mining gave up after {attempts} attempts")]
    MiningExhausted { attempts: u64 },

    #[error("chain holds no records")]
    EmptyChain,

    #[error("root record must have sequence 0 and reference the zero digest")]
    GenesisMismatch,

    #[error("record {index} carries sequence {found}")]
    SequenceGap { index: usize, found: u64 },

    #[error("record {index} links to {found}, predecessor identity is {expected}")]
    BrokenLink {
        index: usize,
        expected: Digest,
        found: Digest,
    },

    #[error("record {index} stores identity {stored} but its fields hash to {derived}")]
    StaleIdentity {
        index: usize,
        stored: Digest,
        derived: Digest,
    },

    #[error("record {index} identity {identity} lacks {required} leading zeros")]
    DifficultyNotMet {
        index: usize,
        identity: Digest,
        required: u8,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
