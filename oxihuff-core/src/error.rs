//! Error types for OxiHuff operations.
//!
//! This module provides a single error type covering all failure modes of
//! the codec: I/O errors from the underlying byte medium, format errors in
//! the padded bit-stream container or the serialized tree, and precondition
//! violations on stream operations.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The padding-count byte at the end of the medium is out of range.
    #[error("Invalid padding count: {value} (must be 0-7)")]
    InvalidPadding {
        /// The out-of-range padding value found in the final byte.
        value: u8,
    },

    /// The medium is too short to contain a padding-count byte.
    #[error("Medium too short: {len} bytes (need at least the padding-count byte)")]
    MediumTooShort {
        /// Actual length of the medium in bytes.
        len: usize,
    },

    /// A read was attempted past the end of the payload.
    #[error("Unexpected end of payload at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the read was attempted.
        bit_position: u64,
    },

    /// A serialized tree ended mid-way through an expected subtree.
    #[error("Truncated tree stream at bit position {bit_position}")]
    TruncatedTree {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// The payload ended in the middle of a code (decode cursor not at the root).
    #[error("Corrupted payload: stream ended mid-code at bit position {bit_position}")]
    CorruptedPayload {
        /// Bit position where the payload ended.
        bit_position: u64,
    },

    /// No frequency records were supplied to tree construction.
    #[error("Cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// A symbol to be encoded has no code in the tree's table.
    #[error("Symbol {symbol:#04x} has no code in this tree")]
    SymbolNotEncodable {
        /// The byte value that could not be encoded.
        symbol: u8,
    },

    /// A write was attempted on an already-closed bit stream.
    #[error("Bit stream writer is already closed")]
    WriterClosed,
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an invalid padding error.
    pub fn invalid_padding(value: u8) -> Self {
        Self::InvalidPadding { value }
    }

    /// Create a medium-too-short error.
    pub fn medium_too_short(len: usize) -> Self {
        Self::MediumTooShort { len }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create a truncated tree error.
    pub fn truncated_tree(bit_position: u64) -> Self {
        Self::TruncatedTree { bit_position }
    }

    /// Create a corrupted payload error.
    pub fn corrupted_payload(bit_position: u64) -> Self {
        Self::CorruptedPayload { bit_position }
    }

    /// Create a symbol-not-encodable error.
    pub fn symbol_not_encodable(symbol: u8) -> Self {
        Self::SymbolNotEncodable { symbol }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiHuffError::invalid_padding(9);
        assert!(err.to_string().contains("9"));

        let err = OxiHuffError::symbol_not_encodable(b'q');
        assert!(err.to_string().contains("0x71"));

        let err = OxiHuffError::truncated_tree(42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiHuffError = io_err.into();
        assert!(matches!(err, OxiHuffError::Io(_)));
    }
}
