//! Diagnostic rendering of Huffman trees.
//!
//! Produces an indented pre-order listing of a tree for inspection on the
//! command line. Rendering is driven entirely by the caller; there is no
//! process-wide toggle.

use crate::tree::{HuffmanTree, Node};
use std::fmt::Write;

/// Tallest tree worth printing; anything deeper is unreadable on a terminal.
pub const MAX_RENDER_HEIGHT: usize = 9;

/// Render a tree as an indented listing, one node per line.
///
/// Leaves show their symbol and count, internal nodes their aggregate
/// count. Returns `None` when the tree is deeper than
/// [`MAX_RENDER_HEIGHT`]; callers should suggest a smaller input instead.
///
/// # Example
///
/// ```
/// use oxihuff_huffman::{HuffmanTree, count_frequencies, render};
///
/// let tree = HuffmanTree::from_frequencies(count_frequencies(b"aab")).unwrap();
/// let listing = render(&tree).unwrap();
/// assert!(listing.contains("'a': 2"));
/// ```
pub fn render(tree: &HuffmanTree) -> Option<String> {
    if tree.root().height() > MAX_RENDER_HEIGHT {
        return None;
    }
    let mut out = String::new();
    render_node(tree.root(), 0, &mut out);
    Some(out)
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, count } => {
            if symbol.is_ascii_graphic() || *symbol == b' ' {
                let _ = writeln!(out, "{indent}'{}': {count}", *symbol as char);
            } else {
                let _ = writeln!(out, "{indent}{symbol:#04x}: {count}");
            }
        }
        Node::Internal { count, left, right } => {
            let _ = writeln!(out, "{indent}*: {count}");
            render_node(left, depth + 1, out);
            render_node(right, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;

    #[test]
    fn test_render_small_tree() {
        let tree = HuffmanTree::from_frequencies(count_frequencies(b"aab")).unwrap();
        let listing = render(&tree).unwrap();
        assert!(listing.starts_with("*: 3"));
        assert!(listing.contains("'b': 1"));
        assert!(listing.contains("'a': 2"));
    }

    #[test]
    fn test_render_nonprintable_symbol() {
        let tree = HuffmanTree::from_frequencies(count_frequencies(&[0x01, 0x01, 0x02])).unwrap();
        let listing = render(&tree).unwrap();
        assert!(listing.contains("0x01: 2"));
    }

    #[test]
    fn test_render_refuses_tall_tree() {
        // Exponential counts force a near-linear chain deeper than the cutoff
        let data: Vec<u8> = (0u8..16)
            .flat_map(|i| std::iter::repeat_n(i, 1usize << i))
            .collect();
        let tree = HuffmanTree::from_frequencies(count_frequencies(&data)).unwrap();
        assert!(tree.root().height() > MAX_RENDER_HEIGHT);
        assert!(render(&tree).is_none());
    }
}
