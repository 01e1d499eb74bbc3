//! The unique identifier shared by entities and commands.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::sequential::{self, SEGMENT};

/// A 128-bit globally unique identifier.
///
/// Serializes to/from the canonical UUID text form
/// (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`), so it stays interoperable with
/// any persistence or transport layer a consumer chooses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(Uuid);

impl Id {
    /// Mint a new identifier.
    ///
    /// Uses the process-wide sequential (COMB-style) generator, so freshly
    /// minted ids keep database index locality under insert load. Prefer
    /// passing ids explicitly in tests for determinism.
    pub fn new() -> Self {
        sequential::next_id()
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Milliseconds since the Unix epoch embedded in the ordering segment.
    ///
    /// Reads the trailing 6 bytes big-endian; see
    /// [`SequentialIdGenerator`](crate::sequential::SequentialIdGenerator)
    /// for the layout. Meaningful only for sequentially generated ids.
    pub fn timestamp_millis(&self) -> u64 {
        let bytes = self.0.as_bytes();
        let mut buf = [0u8; 8];
        buf[2..8].copy_from_slice(&bytes[SEGMENT]);
        u64::from_be_bytes(buf)
    }
}

impl core::fmt::Display for Id {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for Id {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<Id> for Uuid {
    fn from(value: Id) -> Self {
        value.0
    }
}

impl FromStr for Id {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("Id: {e}")))?;
        Ok(Self(uuid))
    }
}
