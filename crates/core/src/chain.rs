//! The append-only chain container
//!
//! A chain always holds at least its root record. Every later record links to
//! the identity of the record before it and has been mined under the chain's
//! difficulty before it becomes visible.

use tracing::{debug, trace};

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::params::{GENESIS_PAYLOAD, GENESIS_SEQUENCE};
use crate::pow::{self, Difficulty, MiningStats, meets_difficulty};
use crate::record::{Candidate, Record};

/// Ordered, hash-linked sequence of records
#[derive(Debug, Clone)]
pub struct Chain {
    records: Vec<Record>,
    difficulty: Difficulty,
    total_attempts: u64,
}

impl Chain {
    /// Create a chain at the default difficulty
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::DEFAULT)
    }

    /// Create a chain whose records (root included) are mined at `difficulty`
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let mut genesis = Candidate::new(GENESIS_PAYLOAD, Digest::ZERO, GENESIS_SEQUENCE);
        let stats = pow::mine(&mut genesis, difficulty);

        debug!(
            %difficulty,
            identity = %genesis.identity(),
            "chain created"
        );

        Self {
            records: vec![genesis.seal()],
            difficulty,
            total_attempts: stats.attempts,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the root record is never removed
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, root first
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Most recently admitted record
    pub fn tail(&self) -> &Record {
        match self.records.last() {
            Some(record) => record,
            None => panic!("chain invariant violated: root record missing"),
        }
    }

    /// Identity derivations spent mining every record in the chain
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Mine `payload` into a new record and append it.
    ///
    /// Blocks until the proof-of-work gate admits the record.
    pub fn append(&mut self, payload: impl AsRef<[u8]>) -> &Record {
        let mut candidate = self.next_candidate(payload.as_ref());
        let stats = pow::mine(&mut candidate, self.difficulty);
        self.admit(candidate, stats)
    }

    /// Like [`Chain::append`], but gives up after `max_attempts` identity
    /// derivations. The chain is unchanged on failure.
    pub fn try_append(&mut self, payload: impl AsRef<[u8]>, max_attempts: u64) -> Result<&Record> {
        let mut candidate = self.next_candidate(payload.as_ref());
        let stats = pow::mine_bounded(&mut candidate, self.difficulty, max_attempts)?;
        Ok(self.admit(candidate, stats))
    }

    /// Check every chain invariant, reporting the first violation
    pub fn verify(&self) -> Result<()> {
        verify_records(&self.records, self.difficulty)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Unmined candidate linked to the current tail
    pub(crate) fn next_candidate(&self, payload: &[u8]) -> Candidate {
        let tail = self.tail();
        Candidate::new(payload, tail.identity(), tail.sequence() + 1)
    }

    /// Push a mined candidate. Callers guarantee it was built from the
    /// current tail and satisfies the chain's difficulty.
    pub(crate) fn admit(&mut self, candidate: Candidate, stats: MiningStats) -> &Record {
        debug_assert_eq!(candidate.previous(), self.tail().identity());
        debug_assert!(meets_difficulty(&candidate.identity(), self.difficulty));

        self.total_attempts = self.total_attempts.saturating_add(stats.attempts);
        self.records.push(candidate.seal());

        let tail = self.tail();
        trace!(
            sequence = tail.sequence(),
            identity = %tail.identity(),
            "record appended"
        );
        tail
    }

    #[cfg(test)]
    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Verify a record sequence against the chain invariants.
///
/// Checks, per record in order: sequence position, predecessor link, stored
/// identity against its fields, and difficulty.
pub fn verify_records(records: &[Record], difficulty: Difficulty) -> Result<()> {
    let Some(root) = records.first() else {
        return Err(Error::EmptyChain);
    };
    if root.sequence() != GENESIS_SEQUENCE || root.previous() != Digest::ZERO {
        return Err(Error::GenesisMismatch);
    }

    for (index, record) in records.iter().enumerate() {
        if record.sequence() != index as u64 {
            return Err(Error::SequenceGap {
                index,
                found: record.sequence(),
            });
        }

        if index > 0 {
            let expected = records[index - 1].identity();
            if record.previous() != expected {
                return Err(Error::BrokenLink {
                    index,
                    expected,
                    found: record.previous(),
                });
            }
        }

        let derived = record.derive_identity();
        if derived != record.identity() {
            return Err(Error::StaleIdentity {
                index,
                stored: record.identity(),
                derived,
            });
        }

        if !meets_difficulty(&record.identity(), difficulty) {
            return Err(Error::DifficultyNotMet {
                index,
                identity: record.identity(),
                required: difficulty.zeros(),
            });
        }
    }

    Ok(())
}
