//! Thread-safe chain handle
//!
//! Appends are serialized by a writer lock held from reading the tail until
//! the mined record is pushed, so two writers can never link to the same
//! predecessor. Mining happens outside the record lock; readers keep seeing
//! the last committed state and never a record that is still being mined.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::chain::Chain;
use crate::error::Result;
use crate::pow::{self, Difficulty};
use crate::record::Record;

#[derive(Debug)]
struct Inner {
    writer: Mutex<()>,
    chain: RwLock<Chain>,
}

/// Cloneable handle to a chain shared between threads
#[derive(Debug, Clone)]
pub struct SharedChain {
    inner: Arc<Inner>,
}

impl SharedChain {
    pub fn new(chain: Chain) -> Self {
        Self {
            inner: Arc::new(Inner {
                writer: Mutex::new(()),
                chain: RwLock::new(chain),
            }),
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(Chain::with_difficulty(difficulty))
    }

    /// Mine and append `payload`, returning a copy of the new record
    pub fn append(&self, payload: impl AsRef<[u8]>) -> Record {
        let _writer = self.inner.writer.lock();

        let (mut candidate, difficulty) = {
            let chain = self.inner.chain.read();
            (chain.next_candidate(payload.as_ref()), chain.difficulty())
        };
        let stats = pow::mine(&mut candidate, difficulty);

        self.inner.chain.write().admit(candidate, stats).clone()
    }

    /// Bounded variant of [`SharedChain::append`]
    pub fn try_append(&self, payload: impl AsRef<[u8]>, max_attempts: u64) -> Result<Record> {
        let _writer = self.inner.writer.lock();

        let (mut candidate, difficulty) = {
            let chain = self.inner.chain.read();
            (chain.next_candidate(payload.as_ref()), chain.difficulty())
        };
        let stats = pow::mine_bounded(&mut candidate, difficulty, max_attempts)?;

        Ok(self.inner.chain.write().admit(candidate, stats).clone())
    }

    /// Snapshot of every committed record
    pub fn records(&self) -> Vec<Record> {
        self.inner.chain.read().records().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.chain.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.chain.read().is_empty()
    }

    pub fn tail(&self) -> Record {
        self.inner.chain.read().tail().clone()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.inner.chain.read().difficulty()
    }

    pub fn verify(&self) -> Result<()> {
        self.inner.chain.read().verify()
    }

    /// Copy of the chain as currently committed
    pub fn snapshot(&self) -> Chain {
        self.inner.chain.read().clone()
    }
}

impl From<Chain> for SharedChain {
    fn from(chain: Chain) -> Self {
        Self::new(chain)
    }
}
