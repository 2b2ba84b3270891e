//! Sparse state-update message encoding/decoding for the paradrop codec.
//!
//! This crate defines the wire message that carries per-entity attribute
//! deltas: two sparse key→float mappings multiplexed into one buffer,
//! encoded through the bit-level primitives in [`wire`].
//!
//! # Wire layout
//!
//! All dwords big-endian, bits MSB-first within a byte:
//!
//! ```text
//! [dword continuous_count]
//! [dword discrete_count]
//! continuous_count × { [dword key] [float value] }
//! discrete_count   × { [dword key] [float value] }
//! ```
//!
//! # Design Principles
//!
//! - **Bounded decoding** - Count fields are validated against
//!   [`CodecLimits`] before any entry is read.
//! - **Deterministic** - The same message always encodes to the same bytes.
//! - **All-or-nothing** - A message that fails mid-decode is entirely
//!   invalid; no partial result is ever returned.
//!
//! # Example
//!
//! ```
//! use codec::{decode_update_bytes, encode_update_to_vec, CodecLimits, StateUpdate};
//!
//! let mut update = StateUpdate::new();
//! update.continuous.insert(1, 3.5);
//! update.discrete.insert(10, 1.0);
//!
//! let bytes = encode_update_to_vec(&update).unwrap();
//! let decoded = decode_update_bytes(&bytes, &CodecLimits::default()).unwrap();
//! assert_eq!(decoded, update);
//! ```

mod error;
mod limits;
mod update;

pub use error::{CodecError, CodecResult, LimitKind};
pub use limits::CodecLimits;
pub use update::{
    decode_update, decode_update_bytes, encode_update, encode_update_to_vec, StateUpdate,
};
