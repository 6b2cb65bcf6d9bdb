//! # OxiHuff Huffman
//!
//! Pure Rust Huffman coding over the OxiHuff padded container format.
//!
//! This crate builds a binary prefix-code tree from symbol frequencies,
//! serializes the tree into its own compact bitstream, and uses it to
//! transform arbitrary byte content into a variable-length bit-packed
//! encoding and back.
//!
//! ## Design
//!
//! - **Deterministic trees**: frequencies are stably sorted and merged with
//!   two FIFO queues; ties between the queues always go to the leaf queue,
//!   so identical input yields a bit-identical tree and payload.
//! - **Two streams**: the compressed payload and the serialized tree are
//!   separate media, each in the padded container format of
//!   [`oxihuff_core::bitstream`]. Decoding needs both.
//! - **No recovery**: a corrupted or truncated stream raises an error; the
//!   codec never guesses.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let encoded = compress(original).unwrap();
//! let decoded = decompress(&encoded.payload, &encoded.tree).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod frequency;
pub mod render;
pub mod tree;

// Re-exports
pub use frequency::{Frequency, count_frequencies};
pub use render::{MAX_RENDER_HEIGHT, render};
pub use tree::{HuffmanTree, Node};

use oxihuff_core::bitstream::{BitReader, BitWriter};
use oxihuff_core::error::Result;

/// The two media produced by one compression pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Bit-packed symbol codes in the padded container format.
    pub payload: Vec<u8>,
    /// Serialized tree in the padded container format.
    pub tree: Vec<u8>,
}

/// Compress a byte sequence, producing the payload and tree media.
///
/// # Errors
///
/// Returns [`OxiHuffError::EmptyInput`](oxihuff_core::OxiHuffError::EmptyInput)
/// for empty input; no tree can be built from zero frequencies.
///
/// # Example
///
/// ```rust
/// use oxihuff_huffman::compress;
///
/// let encoded = compress(b"mississippi").unwrap();
/// assert!(!encoded.payload.is_empty());
/// assert!(!encoded.tree.is_empty());
/// ```
pub fn compress(data: &[u8]) -> Result<Encoded> {
    let tree = HuffmanTree::from_frequencies(count_frequencies(data))?;

    let mut payload_writer = BitWriter::new(Vec::new());
    tree.encode(data, &mut payload_writer)?;

    let mut tree_writer = BitWriter::new(Vec::new());
    tree.write_tree(&mut tree_writer)?;

    Ok(Encoded {
        payload: payload_writer.into_inner()?,
        tree: tree_writer.into_inner()?,
    })
}

/// Decompress a payload medium using its companion tree medium.
///
/// # Errors
///
/// Fails if either medium is not a valid padded container, if the tree
/// stream is truncated, or if the payload does not match the tree.
///
/// # Example
///
/// ```rust
/// use oxihuff_huffman::{compress, decompress};
///
/// let encoded = compress(b"to be or not to be").unwrap();
/// let decoded = decompress(&encoded.payload, &encoded.tree).unwrap();
/// assert_eq!(decoded, b"to be or not to be");
/// ```
pub fn decompress(payload: &[u8], tree: &[u8]) -> Result<Vec<u8>> {
    let mut tree_reader = BitReader::new(tree.to_vec())?;
    let tree = HuffmanTree::from_reader(&mut tree_reader)?;

    let mut payload_reader = BitReader::new(payload.to_vec())?;
    tree.decode(&mut payload_reader)
}
