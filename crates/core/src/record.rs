//! Records and identity derivation
//!
//! A record starts life as a mutable [`Candidate`]. The proof-of-work gate
//! advances the candidate's nonce until its identity qualifies, then the
//! candidate is sealed into an immutable [`Record`].
//!
//! Identity preimage, fixed order and fixed widths (all integers big-endian):
//!
//! ```text
//! sequence (u64) || created_at (i128 ns since epoch) || payload_len (u64) || payload || previous (32B) || nonce (u64)
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use sha2::{Digest as _, Sha256};

use crate::digest::Digest;
use crate::params::{DIGEST_SIZE, GENESIS_SEQUENCE};

/// Compute the identity of a record from its fields.
///
/// Pure: identical inputs always yield the identical digest.
pub fn derive_identity(
    sequence: u64,
    created_at: &DateTime<Utc>,
    payload: &[u8],
    previous: &Digest,
    nonce: u64,
) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(sequence.to_be_bytes());
    hasher.update(timestamp_nanos(created_at).to_be_bytes());
    hasher.update((payload.len() as u64).to_be_bytes());
    hasher.update(payload);
    hasher.update(previous.as_bytes());
    hasher.update(nonce.to_be_bytes());

    let mut bytes = [0u8; DIGEST_SIZE];
    bytes.copy_from_slice(&hasher.finalize());
    Digest::from_bytes(bytes)
}

/// Nanoseconds since the Unix epoch, wide enough for any `DateTime<Utc>`
#[inline(always)]
fn timestamp_nanos(ts: &DateTime<Utc>) -> i128 {
    i128::from(ts.timestamp()) * 1_000_000_000 + i128::from(ts.timestamp_subsec_nanos())
}

/// A record under construction.
///
/// Its nonce and identity change while it is being mined; everything else is
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct Candidate {
    sequence: u64,
    created_at: DateTime<Utc>,
    payload: Vec<u8>,
    previous: Digest,
    nonce: u64,
    identity: Digest,
}

impl Candidate {
    /// Build a candidate stamped with the current time and nonce 0
    pub fn new(payload: impl Into<Vec<u8>>, previous: Digest, sequence: u64) -> Self {
        Self::with_timestamp(payload, previous, sequence, Utc::now())
    }

    /// Build a candidate with an explicit creation time
    pub fn with_timestamp(
        payload: impl Into<Vec<u8>>,
        previous: Digest,
        sequence: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let payload = payload.into();
        let identity = derive_identity(sequence, &created_at, &payload, &previous, 0);

        Self {
            sequence,
            created_at,
            payload,
            previous,
            nonce: 0,
            identity,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn previous(&self) -> Digest {
        self.previous
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Identity for the current nonce
    pub fn identity(&self) -> Digest {
        self.identity
    }

    /// Recompute the identity from the current fields
    pub fn derive_identity(&self) -> Digest {
        derive_identity(
            self.sequence,
            &self.created_at,
            &self.payload,
            &self.previous,
            self.nonce,
        )
    }

    /// Step to the next nonce and refresh the identity
    #[inline(always)]
    pub(crate) fn advance_nonce(&mut self) {
        self.nonce = self.nonce.wrapping_add(1);
        self.identity = self.derive_identity();
    }

    /// Freeze the candidate
    pub fn seal(self) -> Record {
        Record {
            sequence: self.sequence,
            created_at: self.created_at,
            payload: self.payload,
            previous: self.previous,
            nonce: self.nonce,
            identity: self.identity,
        }
    }
}

/// An admitted, immutable ledger record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    sequence: u64,
    created_at: DateTime<Utc>,
    payload: Vec<u8>,
    previous: Digest,
    nonce: u64,
    identity: Digest,
}

impl Record {
    /// Position in the chain, 0 for the root
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload as text, with invalid UTF-8 replaced
    pub fn payload_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    /// Identity of the predecessor ([`Digest::ZERO`] for the root)
    pub fn previous(&self) -> Digest {
        self.previous
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn identity(&self) -> Digest {
        self.identity
    }

    pub fn is_genesis(&self) -> bool {
        self.sequence == GENESIS_SEQUENCE
    }

    /// Recompute the identity from the stored fields.
    ///
    /// Differs from [`Record::identity`] only if the record was altered after
    /// it was sealed.
    pub fn derive_identity(&self) -> Digest {
        derive_identity(
            self.sequence,
            &self.created_at,
            &self.payload,
            &self.previous,
            self.nonce,
        )
    }

    /// Overwrite the payload behind the chain's back, optionally re-hashing
    #[cfg(test)]
    pub(crate) fn forge_payload(&mut self, payload: &[u8], rehash: bool) {
        self.payload = payload.to_vec();
        if rehash {
            self.identity = self.derive_identity();
        }
    }
}
