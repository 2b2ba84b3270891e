//! Bit-packed wire stream primitives for the paradrop codec.
//!
//! This crate provides [`WireWriter`] and [`WireReader`] for bit-level
//! encoding and decoding of fixed-capacity message buffers. Bits are
//! MSB-first within a byte and multi-byte integers are big-endian, so a
//! buffer produced on one peer decodes identically on any other.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Float transport is `to_bits`/`from_bits`, never
//!   pointer punning.
//! - **Bounded operations** - Every read/write checks its full bit cost
//!   before mutating; a failed call leaves the cursor and buffer untouched.
//! - **Explicit errors** - All failures return structured errors, never
//!   panic, so a truncated or hostile buffer cannot crash the process.
//! - **No domain knowledge** - This crate knows nothing about entities or
//!   game state; it moves bits.
//!
//! # Ownership and threading
//!
//! A reader either owns its buffer or borrows caller-owned bytes; which one
//! is fixed by the constructor, and drop behavior follows from the type. A
//! writer always owns its buffer. Both hold mutable cursor state with no
//! internal synchronization: one exclusive owner mutates, typically one
//! reader or writer per in-flight message.
//!
//! # Example
//!
//! ```
//! use wire::{WireReader, WireWriter};
//!
//! let mut writer = WireWriter::new(16);
//! writer.write_bit(true).unwrap();
//! writer.write_dword(0xDEAD_BEEF).unwrap();
//!
//! let bytes = writer.copy_used();
//!
//! let mut reader = WireReader::from_slice(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_dword().unwrap(), 0xDEAD_BEEF);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{WireError, WireResult};
pub use reader::{WireReader, MAX_STRING_BYTES};
pub use writer::WireWriter;
