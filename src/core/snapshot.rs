//! Compact binary capture of game state.
//!
//! Every engine state is plain serde data, so a snapshot is just its
//! `bincode` encoding. Snapshots live in memory; nothing is written to disk.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::SnapshotError;

/// Encode a state to bytes.
pub fn encode<T: Serialize>(state: &T) -> Result<Vec<u8>, SnapshotError> {
    bincode::serialize(state).map_err(SnapshotError::Encode)
}

/// Decode a state from bytes produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapshotError> {
    bincode::deserialize(bytes).map_err(SnapshotError::Decode)
}
