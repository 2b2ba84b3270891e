//! Inspection and debugging tools for the paradrop codec.
//!
//! This crate provides utilities for working with captured update buffers:
//!
//! - Decode an update buffer into structured JSON
//! - Encode a JSON update description back into wire bytes
//! - Summarize buffer structure and size accounting
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not
//!   afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use anyhow::{Context, Result};
use codec::{decode_update_bytes, encode_update_to_vec, CodecLimits, StateUpdate};
use serde::Serialize;
use wire::WireReader;

/// Structural summary of an update buffer.
///
/// Reads only the two count dwords, so it stays useful on buffers the full
/// decode path would reject.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Size of the supplied buffer.
    pub total_bytes: usize,
    /// Declared continuous entry count.
    pub continuous_entries: u32,
    /// Declared discrete entry count.
    pub discrete_entries: u32,
    /// Size the declared counts imply.
    pub expected_bytes: usize,
    /// Bytes present beyond the declared entries.
    pub trailing_bytes: usize,
}

/// Summarizes an update buffer from its count prefixes.
pub fn inspect_update(bytes: &[u8]) -> Result<InspectReport> {
    let mut reader = WireReader::from_slice(bytes);
    let continuous_entries = reader.read_dword().context("read continuous count")?;
    let discrete_entries = reader.read_dword().context("read discrete count")?;

    let entries = continuous_entries as usize + discrete_entries as usize;
    let expected_bytes = 8usize.saturating_add(entries.saturating_mul(8));
    Ok(InspectReport {
        total_bytes: bytes.len(),
        continuous_entries,
        discrete_entries,
        expected_bytes,
        trailing_bytes: bytes.len().saturating_sub(expected_bytes),
    })
}

/// Decodes an update buffer into a JSON value.
pub fn decode_update_json(bytes: &[u8], limits: &CodecLimits) -> Result<serde_json::Value> {
    let update = decode_update_bytes(bytes, limits).context("decode update")?;
    serde_json::to_value(&update).context("serialize update")
}

/// Encodes a JSON update description into wire bytes.
pub fn encode_update_json(json: &str) -> Result<Vec<u8>> {
    let update: StateUpdate = serde_json::from_str(json).context("parse update json")?;
    encode_update_to_vec(&update).context("encode update")
}
