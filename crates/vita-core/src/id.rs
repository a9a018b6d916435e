//! Strongly-typed identifiers: tile ids and generation counters.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::error::TileError;

/// Length in bytes of a [`TileId`].
pub const ID_LEN: usize = 32;

/// Monotonically increasing generation counter.
///
/// Incremented each time a grid advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The following generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Opaque 32-byte identifier of a distributed tile.
///
/// Ids are compared byte-wise. [`TileId::NULL`] (32 ASCII `'0'` bytes) means
/// "no tile". Generated ids are 32 lowercase hex characters, but any 32
/// bytes are accepted when decoding the wire format.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId([u8; ID_LEN]);

impl TileId {
    /// The "no tile" id.
    pub const NULL: TileId = TileId([b'0'; ID_LEN]);

    /// Wrap raw id bytes.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy an id out of a slice, which must be exactly [`ID_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TileError> {
        let raw: [u8; ID_LEN] = bytes.try_into().map_err(|_| TileError::InvalidId {
            reason: format!("expected {ID_LEN} bytes, got {}", bytes.len()),
        })?;
        Ok(Self(raw))
    }

    /// Generate a fresh random id from the thread-local generator.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a random id: 16 random bytes rendered as lowercase hex.
    ///
    /// Never returns [`TileId::NULL`].
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        loop {
            let mut raw = [0u8; ID_LEN / 2];
            rng.fill(&mut raw[..]);
            let mut out = [0u8; ID_LEN];
            for (i, b) in raw.iter().enumerate() {
                out[2 * i] = HEX[(b >> 4) as usize];
                out[2 * i + 1] = HEX[(b & 0x0f) as usize];
            }
            let id = Self(out);
            if !id.is_null() {
                return id;
            }
        }
    }

    /// Returns `true` for [`TileId::NULL`].
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// The raw id bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }
}

impl Default for TileId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileId({self})")
    }
}

impl FromStr for TileId {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<[u8; ID_LEN]> for TileId {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}
