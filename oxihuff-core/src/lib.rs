//! # OxiHuff Core
//!
//! Core components for the OxiHuff Huffman coding library.
//!
//! This crate provides the fundamental building blocks shared by the codec
//! and the CLI:
//!
//! - [`bitstream`]: MSB-first bit-level I/O over the padded container format
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiHuff is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ L3: CLI                                     │
//! │     encode / decode commands                │
//! ├─────────────────────────────────────────────┤
//! │ L2: Codec (oxihuff-huffman)                 │
//! │     frequency table, tree, symbol codes     │
//! ├─────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                  │
//! │     BitReader/BitWriter, padded container   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Container format
//!
//! Every OxiHuff stream is a byte sequence where each byte but the last
//! packs 8 payload bits MSB-first, and the final byte holds the count of
//! padding bits (0-7) in the preceding byte. The reader consumes that
//! trailing byte on construction to know exactly where the payload ends.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_byte(0xC3).unwrap();
//! writer.write_bit(true).unwrap();
//! let medium = writer.into_inner().unwrap();
//!
//! let mut reader = BitReader::new(medium).unwrap();
//! assert_eq!(reader.next_byte().unwrap(), 0xC3);
//! assert!(reader.next_bit().unwrap());
//! assert!(!reader.has_bits());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiHuffError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{OxiHuffError, Result};
}
