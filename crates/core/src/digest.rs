//! Record identity digests

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::params::{DIGEST_HEX_LEN, DIGEST_SIZE};

/// A 256-bit record identity.
///
/// Always rendered as 64 lowercase hex characters. [`Digest::ZERO`] is the
/// predecessor sentinel carried by every chain's root record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// All-zero digest, used as the root record's predecessor
    pub const ZERO: Digest = Digest([0u8; DIGEST_SIZE]);

    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(Error::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                DIGEST_HEX_LEN,
                s.len()
            )));
        }

        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| Error::InvalidDigest(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Number of leading `'0'` characters in the hex rendering
    #[inline(always)]
    pub fn leading_zero_nibbles(&self) -> u32 {
        let mut zeros = 0u32;

        for byte in self.0.iter() {
            if *byte == 0 {
                zeros += 2;
            } else {
                if *byte >> 4 == 0 {
                    zeros += 1;
                }
                break;
            }
        }

        zeros
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}
