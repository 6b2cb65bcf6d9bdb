//! Bit-level I/O over the padded container format.
//!
//! This module provides `BitReader` and `BitWriter` for the container format
//! used by all OxiHuff streams: a sequence of bytes where every byte but the
//! last holds 8 packed payload bits, and the final byte records how many
//! low-order bits of the preceding byte are padding (0-7).
//!
//! # Bit Ordering
//!
//! Bits are packed MSB-first: the first bit written lands in the most
//! significant position of each byte, and `BitReader` hands bits back in the
//! same order.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bit(true).unwrap();
//! writer.write_bit(false).unwrap();
//! writer.write_bit(true).unwrap();
//! let medium = writer.into_inner().unwrap();
//!
//! // 3 payload bits -> one padded byte plus the padding-count byte
//! assert_eq!(medium, vec![0b1010_0000, 5]);
//!
//! // Reading them back
//! let mut reader = BitReader::new(medium).unwrap();
//! assert!(reader.next_bit().unwrap());
//! assert!(!reader.next_bit().unwrap());
//! assert!(reader.next_bit().unwrap());
//! assert!(!reader.has_bits());
//! ```

use crate::error::{OxiHuffError, Result};
use std::io::Write;

/// A bit-level reader over a complete, finite byte medium.
///
/// The reader owns the whole medium because the container format stores its
/// padding count in the final byte: construction inspects that byte, treats
/// only the bytes before it as payload, and excludes the recorded number of
/// low-order bits from the last payload byte.
#[derive(Debug, Clone)]
pub struct BitReader {
    /// The complete medium, including the trailing padding-count byte.
    data: Vec<u8>,
    /// Number of payload bytes (everything before the padding-count byte).
    payload_len: usize,
    /// Padding bits in the final payload byte, taken from the last byte.
    padding_bits: i8,
    /// Number of payload bytes pulled into `current_byte` so far.
    num_read: usize,
    /// The byte bits are currently being extracted from.
    current_byte: u8,
    /// Bit cursor within `current_byte`: 7 down to -1 (exhausted).
    current_bit: i8,
}

impl BitReader {
    /// Create a `BitReader` over the given medium.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::MediumTooShort`] if the medium cannot hold a
    /// padding-count byte, and [`OxiHuffError::InvalidPadding`] if that byte
    /// is outside `0..=7` or claims padding in a zero-byte payload.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(OxiHuffError::medium_too_short(0));
        }
        let payload_len = data.len() - 1;
        let padding = data[payload_len];
        if padding > 7 || (payload_len == 0 && padding != 0) {
            return Err(OxiHuffError::invalid_padding(padding));
        }
        Ok(Self {
            data,
            payload_len,
            padding_bits: padding as i8,
            num_read: 0,
            current_byte: 0,
            current_bit: -1,
        })
    }

    /// Whether at least one unread payload bit remains.
    ///
    /// False exactly when the logical end of the payload is reached,
    /// accounting for the padding bits excluded from the final byte.
    pub fn has_bits(&self) -> bool {
        self.remaining_bits() > 0
    }

    /// Whether at least one full unread payload byte remains.
    ///
    /// Padding-aware: false once fewer than 8 payload bits are left, even
    /// if an unloaded byte of the medium remains.
    pub fn has_bytes(&self) -> bool {
        self.remaining_bits() >= 8
    }

    /// Payload bits not yet consumed, net of the trailing padding.
    fn remaining_bits(&self) -> usize {
        let unread = (self.payload_len - self.num_read) * 8 + (self.current_bit + 1) as usize;
        unread.saturating_sub(self.padding_bits as usize)
    }

    /// Read the next payload bit, MSB-first within each byte.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::UnexpectedEof`] when called with no payload
    /// bits remaining.
    pub fn next_bit(&mut self) -> Result<bool> {
        if !self.has_bits() {
            return Err(OxiHuffError::unexpected_eof(self.bit_position()));
        }
        if self.current_bit == -1 {
            self.current_byte = self.data[self.num_read];
            self.num_read += 1;
            self.current_bit = 7;
        }
        let bit = (self.current_byte >> self.current_bit) & 1 == 1;
        self.current_bit -= 1;
        Ok(bit)
    }

    /// Assemble up to 8 bits into a byte, MSB-first.
    ///
    /// Stops early if the payload ends mid-byte; the bits that were
    /// available are left-packed at the high end. Callers that require a
    /// full byte must only call this while at least 8 bits remain.
    pub fn next_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for bit_index in 0..8 {
            if !self.has_bits() {
                break;
            }
            byte |= (self.next_bit()? as u8) << (7 - bit_index);
        }
        Ok(byte)
    }

    /// Rewind to the start of the payload region.
    pub fn reset(&mut self) {
        self.num_read = 0;
        self.current_byte = 0;
        self.current_bit = -1;
    }

    /// Number of payload bits consumed so far (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.num_read as u64 * 8 - (self.current_bit + 1) as u64
    }

    /// The padding count recorded in the final byte of the medium.
    pub fn padding_bits(&self) -> u8 {
        self.padding_bits as u8
    }

    /// Consume the reader and return the underlying medium.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

/// A bit-level writer that produces the padded container format.
///
/// Bits accumulate MSB-first in the current byte; each full byte is flushed
/// to the underlying writer. [`close`](BitWriter::close) pads the final
/// partial byte with zero bits and appends the padding-count byte that
/// [`BitReader`] consumes. Dropping an unclosed writer closes it on a
/// best-effort basis so an early error return never leaves a medium without
/// its trailing byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// The byte bits are currently being packed into.
    current_byte: u8,
    /// Bit cursor within `current_byte`: 7 down to -1 (full).
    current_bit: i8,
    /// Whether the trailing padding-count byte has been written.
    closed: bool,
    /// Total payload bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_byte: 0,
            current_bit: 7,
            closed: false,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Total payload bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write a single bit at the current MSB-first position.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::WriterClosed`] after [`close`](Self::close),
    /// or an I/O error from flushing a completed byte.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        if self.closed {
            return Err(OxiHuffError::WriterClosed);
        }
        self.current_byte |= (bit as u8) << self.current_bit;
        self.current_bit -= 1;
        self.total_bits_written += 1;
        if self.current_bit == -1 {
            self.flush_current_byte()?;
        }
        Ok(())
    }

    /// Write a full byte as 8 bits, MSB first.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        for bit_index in 0..8 {
            self.write_bit((byte >> (7 - bit_index)) & 1 == 1)?;
        }
        Ok(())
    }

    /// Finish the stream: flush the partial byte zero-padded, then append
    /// the padding-count byte (0 if the last byte was exactly full).
    ///
    /// Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        if self.current_bit != 7 {
            let padding = (self.current_bit + 1) as u8;
            self.flush_current_byte()?;
            self.current_byte = padding;
            self.flush_current_byte()?;
        } else {
            self.current_byte = 0;
            self.flush_current_byte()?;
        }
        self.writer.flush()?;
        self.closed = true;
        Ok(())
    }

    /// Close the stream and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.close()?;
        // Prevent Drop from running; the stream is already closed.
        let this = std::mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never used again and its Drop is suppressed, so
        // moving the writer out by read is sound.
        Ok(unsafe { std::ptr::read(&this.writer) })
    }

    /// Flush `current_byte` to the writer and reset the cursor.
    fn flush_current_byte(&mut self) -> Result<()> {
        self.writer.write_all(&[self.current_byte])?;
        self.current_byte = 0;
        self.current_bit = 7;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        // Best-effort close so the padding-count byte is never missing.
        let _ = self.close();
    }
}
