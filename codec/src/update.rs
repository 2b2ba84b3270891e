//! The sparse state-update message.

use std::collections::BTreeMap;

use wire::{WireReader, WireWriter};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;

/// Encoded size of the two count prefixes, in bytes.
const HEADER_BYTES: usize = 8;
/// Encoded size of one key/value pair, in bytes.
const PAIR_BYTES: usize = 8;

/// A sparse delta of one entity's replicated attributes.
///
/// Two independently-keyed mappings share one message: `continuous` for
/// attributes that vary smoothly tick to tick (positions, headings) and
/// `discrete` for attributes that change in steps (state flags, counters
/// carried as floats). Keys are opaque attribute identifiers chosen by the
/// simulation layer; the codec never inspects them.
///
/// `BTreeMap` keeps encode iteration deterministic: the same message always
/// produces the same bytes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateUpdate {
    /// Smoothly-varying attributes.
    pub continuous: BTreeMap<u32, f32>,
    /// Step-varying attributes.
    pub discrete: BTreeMap<u32, f32>,
}

impl StateUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if both mappings are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.continuous.is_empty() && self.discrete.is_empty()
    }

    /// Returns the exact encoded size in bytes, for sizing writers.
    #[must_use]
    pub fn encoded_bytes(&self) -> usize {
        HEADER_BYTES + (self.continuous.len() + self.discrete.len()) * PAIR_BYTES
    }
}

/// Encodes an update into the writer.
///
/// Layout: both entry counts as dwords, then each mapping as
/// `{ key dword, value float }` pairs in key order, continuous first.
pub fn encode_update(update: &StateUpdate, writer: &mut WireWriter) -> CodecResult<()> {
    writer.write_dword(count_prefix(update.continuous.len())?)?;
    writer.write_dword(count_prefix(update.discrete.len())?)?;

    for (&key, &value) in &update.continuous {
        writer.write_dword(key)?;
        writer.write_float(value)?;
    }
    for (&key, &value) in &update.discrete {
        writer.write_dword(key)?;
        writer.write_float(value)?;
    }
    Ok(())
}

/// Decodes an update from the reader into a fresh message.
///
/// Both counts are validated against `limits` before any pair is read.
/// On error the message is entirely invalid; no partial result is returned.
pub fn decode_update(
    reader: &mut WireReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<StateUpdate> {
    let continuous_count = reader.read_dword()? as usize;
    let discrete_count = reader.read_dword()? as usize;

    if continuous_count > limits.max_continuous_entries {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::ContinuousEntries,
            limit: limits.max_continuous_entries,
            actual: continuous_count,
        });
    }
    if discrete_count > limits.max_discrete_entries {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::DiscreteEntries,
            limit: limits.max_discrete_entries,
            actual: discrete_count,
        });
    }

    let mut update = StateUpdate::new();
    for _ in 0..continuous_count {
        let key = reader.read_dword()?;
        let value = reader.read_float()?;
        update.continuous.insert(key, value);
    }
    for _ in 0..discrete_count {
        let key = reader.read_dword()?;
        let value = reader.read_float()?;
        update.discrete.insert(key, value);
    }
    Ok(update)
}

/// Encodes an update into a right-sized detached buffer.
pub fn encode_update_to_vec(update: &StateUpdate) -> CodecResult<Vec<u8>> {
    let mut writer = WireWriter::new(update.encoded_bytes());
    encode_update(update, &mut writer)?;
    Ok(writer.copy_used())
}

/// Decodes an update from raw received bytes via a borrowing reader.
pub fn decode_update_bytes(bytes: &[u8], limits: &CodecLimits) -> CodecResult<StateUpdate> {
    let mut reader = WireReader::from_slice(bytes);
    decode_update(&mut reader, limits)
}

fn count_prefix(len: usize) -> CodecResult<u32> {
    u32::try_from(len).map_err(|_| CodecError::LengthOverflow { length: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StateUpdate {
        let mut update = StateUpdate::new();
        update.continuous.insert(1, 3.5);
        update.continuous.insert(2, -0.25);
        update.discrete.insert(10, 1.0);
        update
    }

    #[test]
    fn empty_update() {
        let update = StateUpdate::new();
        assert!(update.is_empty());
        assert_eq!(update.encoded_bytes(), 8);
    }

    #[test]
    fn encoded_bytes_counts_both_mappings() {
        assert_eq!(sample().encoded_bytes(), 8 + 3 * 8);
    }

    #[test]
    fn encode_layout_counts_then_pairs() {
        let bytes = encode_update_to_vec(&sample()).unwrap();
        assert_eq!(bytes.len(), 32);
        // Counts, big-endian.
        assert_eq!(&bytes[0..4], &[0, 0, 0, 2]);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 1]);
        // First continuous pair: key 1, then 3.5f32.
        assert_eq!(&bytes[8..12], &[0, 0, 0, 1]);
        assert_eq!(&bytes[12..16], &3.5f32.to_bits().to_be_bytes());
        // Discrete pair sits after both continuous pairs.
        assert_eq!(&bytes[24..28], &[0, 0, 0, 10]);
        assert_eq!(&bytes[28..32], &1.0f32.to_bits().to_be_bytes());
    }

    #[test]
    fn encode_is_deterministic_across_insertion_order() {
        let mut reordered = StateUpdate::new();
        reordered.discrete.insert(10, 1.0);
        reordered.continuous.insert(2, -0.25);
        reordered.continuous.insert(1, 3.5);
        assert_eq!(
            encode_update_to_vec(&sample()).unwrap(),
            encode_update_to_vec(&reordered).unwrap()
        );
    }

    #[test]
    fn decode_rejects_continuous_count_over_limit() {
        let mut big = StateUpdate::new();
        for key in 0..20 {
            big.continuous.insert(key, 0.0);
        }
        let bytes = encode_update_to_vec(&big).unwrap();
        let err = decode_update_bytes(&bytes, &CodecLimits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            CodecError::LimitsExceeded {
                kind: LimitKind::ContinuousEntries,
                limit: 16,
                actual: 20,
            }
        );
    }

    #[test]
    fn decode_rejects_discrete_count_over_limit() {
        let mut big = StateUpdate::new();
        for key in 0..20 {
            big.discrete.insert(key, 0.0);
        }
        let bytes = encode_update_to_vec(&big).unwrap();
        let err = decode_update_bytes(&bytes, &CodecLimits::for_testing()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LimitsExceeded {
                kind: LimitKind::DiscreteEntries,
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_hostile_count_before_reading_pairs() {
        // Counts claim four billion entries in an 8-byte buffer; the limit
        // check must fire, not an attempted four-billion-entry read.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0xFFFF_FFFFu32.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        let err = decode_update_bytes(&bytes, &CodecLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LimitsExceeded {
                kind: LimitKind::ContinuousEntries,
                ..
            }
        ));
    }

    #[test]
    fn decode_truncated_buffer_is_a_wire_error() {
        let bytes = encode_update_to_vec(&sample()).unwrap();
        let err = decode_update_bytes(&bytes[..20], &CodecLimits::default()).unwrap_err();
        assert!(matches!(err, CodecError::Wire(_)));
    }

    #[test]
    fn writer_too_small_is_a_wire_error() {
        let mut writer = WireWriter::new(8);
        let err = encode_update(&sample(), &mut writer).unwrap_err();
        assert!(matches!(err, CodecError::Wire(_)));
    }
}
