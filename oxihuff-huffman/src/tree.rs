//! Huffman prefix tree: construction, serialization, and the symbol codec.
//!
//! Trees are built from a frequency table with a greedy two-queue merge, or
//! reconstructed from a serialized tree stream. Once built, a tree is
//! immutable: it carries a derived code table for encoding and is traversed
//! bit-by-bit for decoding.

use crate::frequency::Frequency;
use oxihuff_core::bitstream::{BitReader, BitWriter};
use oxihuff_core::error::{OxiHuffError, Result};
use std::collections::{HashMap, VecDeque};
use std::io::Write;

/// A node of the prefix tree.
///
/// Internal nodes always have exactly two children; prefix-freedom of the
/// derived codes follows structurally from this split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf holding one input symbol and its occurrence count.
    Leaf {
        /// The byte value this leaf encodes.
        symbol: u8,
        /// Occurrence count (0 for deserialized trees).
        count: u64,
    },
    /// An internal node aggregating two subtrees.
    Internal {
        /// Sum of the two children's counts.
        count: u64,
        /// Left subtree (branch bit 0).
        left: Box<Node>,
        /// Right subtree (branch bit 1).
        right: Box<Node>,
    },
}

impl Node {
    /// The count stored in this node.
    pub fn count(&self) -> u64 {
        match self {
            Node::Leaf { count, .. } | Node::Internal { count, .. } => *count,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Height of the subtree rooted here (a lone leaf has height 0).
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/// A Huffman tree with its derived code table.
///
/// The code table maps each symbol to its root-to-leaf branch path
/// (`false` = left, `true` = right) and is read-only after construction.
///
/// # Single-symbol alphabets
///
/// A tree built from exactly one distinct symbol is a lone leaf. Its symbol
/// gets the one-bit code `0` rather than an empty path, so the payload
/// length still determines how many symbols were encoded;
/// [`decode`](HuffmanTree::decode) emits the symbol once per payload bit.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
    codes: HashMap<u8, Vec<bool>>,
}

impl HuffmanTree {
    /// Build a tree from a set of frequency records.
    ///
    /// The records are stably sorted by ascending count and merged with two
    /// FIFO queues: leaves start on the "singles" queue, newly created
    /// internal nodes go to the back of the "merges" queue, and each step
    /// pops the smaller head twice (ties prefer the singles queue) to form a
    /// new internal node. Pre-sorted input makes this O(n) and the fixed
    /// tie-break makes the shape fully deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::EmptyInput`] if `frequencies` is empty.
    pub fn from_frequencies(mut frequencies: Vec<Frequency>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(OxiHuffError::EmptyInput);
        }
        frequencies.sort_by_key(|freq| freq.count);

        let mut singles: VecDeque<Node> = frequencies
            .into_iter()
            .map(|freq| Node::Leaf {
                symbol: freq.symbol,
                count: freq.count,
            })
            .collect();
        let mut merges: VecDeque<Node> = VecDeque::new();

        while singles.len() + merges.len() > 1 {
            // remove_smallest cannot come up empty while two nodes remain
            let left = Self::remove_smallest(&mut singles, &mut merges)
                .ok_or(OxiHuffError::EmptyInput)?;
            let right = Self::remove_smallest(&mut singles, &mut merges)
                .ok_or(OxiHuffError::EmptyInput)?;
            merges.push_back(Node::Internal {
                count: left.count() + right.count(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        let root = Self::remove_smallest(&mut singles, &mut merges)
            .ok_or(OxiHuffError::EmptyInput)?;
        Ok(Self::with_root(root))
    }

    /// Reconstruct a tree from its serialized form.
    ///
    /// The stream is read pre-order: bit `1` introduces a leaf whose symbol
    /// is the next 8 bits, bit `0` an internal node followed by its two
    /// children. Counts are not serialized, so every node comes back with
    /// count 0; only the traversal structure matters for decoding.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::TruncatedTree`] if the stream is empty or
    /// ends before an expected subtree or leaf symbol is complete.
    pub fn from_reader(reader: &mut BitReader) -> Result<Self> {
        let root = Self::read_node(reader)?;
        Ok(Self::with_root(root))
    }

    /// Serialize the tree shape and leaf symbols, pre-order.
    ///
    /// Leaves are written as bit `1` followed by the raw symbol byte,
    /// internal nodes as bit `0` followed by the left then right subtree.
    pub fn write_tree<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        Self::write_node(&self.root, writer)
    }

    /// Encode a single byte by emitting its code, root-to-leaf order.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::SymbolNotEncodable`] if the symbol never
    /// occurred in the frequency table this tree was built from.
    pub fn encode_byte<W: Write>(&self, symbol: u8, writer: &mut BitWriter<W>) -> Result<()> {
        let code = self
            .codes
            .get(&symbol)
            .ok_or_else(|| OxiHuffError::symbol_not_encodable(symbol))?;
        for &bit in code {
            writer.write_bit(bit)?;
        }
        Ok(())
    }

    /// Encode a byte sequence in order. Codes are prefix-free, so no
    /// separators are needed.
    pub fn encode<W: Write>(&self, data: &[u8], writer: &mut BitWriter<W>) -> Result<()> {
        for &byte in data {
            self.encode_byte(byte, writer)?;
        }
        Ok(())
    }

    /// Decode the full payload by walking the tree bit-by-bit.
    ///
    /// Bit `0` moves to the left child, bit `1` to the right; reaching a
    /// leaf emits its symbol and resets the cursor to the root. For a
    /// lone-leaf tree, each payload bit emits the sole symbol.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::CorruptedPayload`] if the payload ends while
    /// the cursor is part-way down a code, which indicates a stream that
    /// does not match this tree.
    pub fn decode(&self, reader: &mut BitReader) -> Result<Vec<u8>> {
        let mut output = Vec::new();

        if let Node::Leaf { symbol, .. } = self.root {
            while reader.has_bits() {
                reader.next_bit()?;
                output.push(symbol);
            }
            return Ok(output);
        }

        let mut current = &self.root;
        while reader.has_bits() {
            let bit = reader.next_bit()?;
            current = match current {
                Node::Internal { left, right, .. } => {
                    if bit { right.as_ref() } else { left.as_ref() }
                }
                // The cursor resets to the (internal) root after every
                // emitted symbol, so it can never sit on a leaf here.
                Node::Leaf { .. } => {
                    return Err(OxiHuffError::corrupted_payload(reader.bit_position()));
                }
            };
            if let Node::Leaf { symbol, .. } = current {
                output.push(*symbol);
                current = &self.root;
            }
        }

        if !std::ptr::eq(current, &self.root) {
            return Err(OxiHuffError::corrupted_payload(reader.bit_position()));
        }
        Ok(output)
    }

    /// The derived code table (symbol to branch path, `false` = left).
    pub fn codes(&self) -> &HashMap<u8, Vec<bool>> {
        &self.codes
    }

    /// The code for one symbol, if it is in the table.
    pub fn code_for(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// The root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    fn with_root(root: Node) -> Self {
        let mut codes = HashMap::new();
        let mut path = Vec::new();
        Self::build_codes(&root, &mut path, &mut codes);
        Self { root, codes }
    }

    /// Record the branch path for every leaf, depth-first.
    fn build_codes(node: &Node, path: &mut Vec<bool>, codes: &mut HashMap<u8, Vec<bool>>) {
        match node {
            Node::Leaf { symbol, .. } => {
                if path.is_empty() {
                    // Lone-leaf tree: one-bit code instead of an empty path
                    codes.insert(*symbol, vec![false]);
                } else {
                    codes.insert(*symbol, path.clone());
                }
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                Self::build_codes(left, path, codes);
                path.pop();
                path.push(true);
                Self::build_codes(right, path, codes);
                path.pop();
            }
        }
    }

    /// Pop the smaller-count head of the two queues, preferring the singles
    /// queue on equal counts.
    fn remove_smallest(singles: &mut VecDeque<Node>, merges: &mut VecDeque<Node>) -> Option<Node> {
        match (singles.front(), merges.front()) {
            (Some(single), Some(merge)) => {
                if single.count() <= merge.count() {
                    singles.pop_front()
                } else {
                    merges.pop_front()
                }
            }
            (Some(_), None) => singles.pop_front(),
            (None, _) => merges.pop_front(),
        }
    }

    fn write_node<W: Write>(node: &Node, writer: &mut BitWriter<W>) -> Result<()> {
        match node {
            Node::Leaf { symbol, .. } => {
                writer.write_bit(true)?;
                writer.write_byte(*symbol)
            }
            Node::Internal { left, right, .. } => {
                writer.write_bit(false)?;
                Self::write_node(left, writer)?;
                Self::write_node(right, writer)
            }
        }
    }

    fn read_node(reader: &mut BitReader) -> Result<Node> {
        if !reader.has_bits() {
            return Err(OxiHuffError::truncated_tree(reader.bit_position()));
        }
        if reader.next_bit()? {
            // Leaf: the symbol is the next 8 bits. Assembled manually
            // because next_byte would left-pad a truncated symbol silently.
            let mut symbol = 0u8;
            for bit_index in 0..8 {
                if !reader.has_bits() {
                    return Err(OxiHuffError::truncated_tree(reader.bit_position()));
                }
                symbol |= (reader.next_bit()? as u8) << (7 - bit_index);
            }
            Ok(Node::Leaf { symbol, count: 0 })
        } else {
            let left = Self::read_node(reader)?;
            let right = Self::read_node(reader)?;
            Ok(Node::Internal {
                count: 0,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;

    fn tree_from(data: &[u8]) -> HuffmanTree {
        HuffmanTree::from_frequencies(count_frequencies(data)).unwrap()
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            HuffmanTree::from_frequencies(Vec::new()),
            Err(OxiHuffError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_symbol_code() {
        let tree = tree_from(b"aaaa");
        assert!(tree.root().is_leaf());
        assert_eq!(tree.code_for(b'a'), Some(&[false][..]));
    }

    #[test]
    fn test_tie_break_prefers_singles_queue() {
        // Counts {a:1, b:1, c:2}: a and b merge into an internal node of
        // count 2, which ties with leaf c. The leaf must win the tie, so c
        // becomes the left child of the root.
        let freqs = vec![
            Frequency::new(b'a', 1),
            Frequency::new(b'b', 1),
            Frequency::new(b'c', 2),
        ];
        let tree = HuffmanTree::from_frequencies(freqs).unwrap();
        assert_eq!(tree.code_for(b'c'), Some(&[false][..]));
        assert_eq!(tree.code_for(b'a'), Some(&[true, false][..]));
        assert_eq!(tree.code_for(b'b'), Some(&[true, true][..]));
    }

    #[test]
    fn test_internal_counts_are_sums() {
        let tree = tree_from(b"aabbbcccc");
        match tree.root() {
            Node::Internal { count, left, right } => {
                assert_eq!(*count, 9);
                assert_eq!(left.count() + right.count(), 9);
            }
            Node::Leaf { .. } => panic!("expected an internal root"),
        }
    }

    #[test]
    fn test_leaf_and_internal_node_counts() {
        // N distinct symbols -> N leaves and N-1 internal nodes
        fn count_nodes(node: &Node) -> (usize, usize) {
            match node {
                Node::Leaf { .. } => (1, 0),
                Node::Internal { left, right, .. } => {
                    let (ll, li) = count_nodes(left);
                    let (rl, ri) = count_nodes(right);
                    (ll + rl, li + ri + 1)
                }
            }
        }
        for data in [&b"ab"[..], b"abacus", b"the quick brown fox"] {
            let distinct = count_frequencies(data).len();
            let (leaves, internals) = count_nodes(tree_from(data).root());
            assert_eq!(leaves, distinct);
            assert_eq!(internals, distinct - 1);
        }
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let tree = tree_from(b"ab");
        let mut writer = BitWriter::new(Vec::new());
        assert!(matches!(
            tree.encode_byte(b'z', &mut writer),
            Err(OxiHuffError::SymbolNotEncodable { symbol: b'z' })
        ));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let data = b"if a machine is expected to be infallible, it cannot also be intelligent";
        let tree = tree_from(data);

        let mut writer = BitWriter::new(Vec::new());
        tree.encode(data, &mut writer).unwrap();
        let mut reader = BitReader::new(writer.into_inner().unwrap()).unwrap();
        assert_eq!(tree.decode(&mut reader).unwrap(), data);
    }

    #[test]
    fn test_decode_mid_code_is_error() {
        // Codes for {a:1, b:1, c:2} are c=0, a=10, b=11; a lone 1 bit stops
        // at the internal node above a and b.
        let freqs = vec![
            Frequency::new(b'a', 1),
            Frequency::new(b'b', 1),
            Frequency::new(b'c', 2),
        ];
        let tree = HuffmanTree::from_frequencies(freqs).unwrap();

        let mut writer = BitWriter::new(Vec::new());
        writer.write_bit(true).unwrap();
        let mut reader = BitReader::new(writer.into_inner().unwrap()).unwrap();
        assert!(matches!(
            tree.decode(&mut reader),
            Err(OxiHuffError::CorruptedPayload { .. })
        ));
    }

    #[test]
    fn test_tree_serialization_roundtrip() {
        let tree = tree_from(b"huffman trees are serialized pre-order");

        let mut writer = BitWriter::new(Vec::new());
        tree.write_tree(&mut writer).unwrap();
        let mut reader = BitReader::new(writer.into_inner().unwrap()).unwrap();
        let rebuilt = HuffmanTree::from_reader(&mut reader).unwrap();

        // Counts are not serialized; the code tables must match exactly.
        assert_eq!(tree.codes(), rebuilt.codes());
        assert_eq!(rebuilt.root().count(), 0);
    }

    #[test]
    fn test_truncated_tree_is_error() {
        let tree = tree_from(b"ab");
        let mut writer = BitWriter::new(Vec::new());
        tree.write_tree(&mut writer).unwrap();
        let full = writer.into_inner().unwrap();

        // Re-pack only the first 10 of the 19 tree bits
        let mut source = BitReader::new(full).unwrap();
        let mut truncated = BitWriter::new(Vec::new());
        for _ in 0..10 {
            truncated.write_bit(source.next_bit().unwrap()).unwrap();
        }
        let mut reader = BitReader::new(truncated.into_inner().unwrap()).unwrap();
        assert!(matches!(
            HuffmanTree::from_reader(&mut reader),
            Err(OxiHuffError::TruncatedTree { .. })
        ));
    }

    #[test]
    fn test_empty_tree_stream_is_error() {
        let writer = BitWriter::new(Vec::new());
        let mut reader = BitReader::new(writer.into_inner().unwrap()).unwrap();
        assert!(matches!(
            HuffmanTree::from_reader(&mut reader),
            Err(OxiHuffError::TruncatedTree { .. })
        ));
    }

    #[test]
    fn test_deterministic_shape() {
        let data = b"deterministic tie-breaking yields identical trees";
        let first = tree_from(data);
        let second = tree_from(data);
        assert_eq!(first.root(), second.root());
        assert_eq!(first.codes(), second.codes());
    }
}
