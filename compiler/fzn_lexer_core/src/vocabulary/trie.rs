//! Byte trie over the literal rules of one vocabulary.

use smallvec::SmallVec;

#[derive(Clone, Debug, Default)]
struct Node {
    /// `(byte, child index)`, unsorted; fan-out is tiny past the root.
    children: SmallVec<[(u8, u32); 4]>,
    /// Rule index accepting at this node.
    accept: Option<u16>,
}

/// All literal spellings of a vocabulary, keyed by byte.
#[derive(Clone, Debug)]
pub struct LiteralTrie {
    nodes: Vec<Node>,
}

impl Default for LiteralTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralTrie {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        LiteralTrie {
            nodes: vec![Node::default()],
        }
    }

    #[inline]
    fn child(&self, node: usize, byte: u8) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .find(|&&(b, _)| b == byte)
            .map(|&(_, idx)| idx as usize)
    }

    /// Insert `text` as accepted by `rule`.
    ///
    /// If the same text is inserted twice, the lower rule index is kept.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by total literal length"
    )]
    pub fn insert(&mut self, text: &str, rule: u16) {
        let mut node = 0;
        for &byte in text.as_bytes() {
            node = if let Some(next) = self.child(node, byte) {
                next
            } else {
                let next = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node].children.push((byte, next as u32));
                next
            };
        }
        let accept = &mut self.nodes[node].accept;
        *accept = Some(accept.map_or(rule, |existing| existing.min(rule)));
    }

    /// The longest literal that is a prefix of `bytes`.
    ///
    /// Returns `(length, rule index)`. Literal spellings are unique, so at
    /// any given length at most one literal accepts; the longest is the only
    /// one that can win a maximal-munch comparison.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "literal lengths are a few bytes"
    )]
    pub fn longest_prefix(&self, bytes: &[u8]) -> Option<(u32, u16)> {
        let mut node = 0;
        let mut best = None;
        for (i, &byte) in bytes.iter().enumerate() {
            let Some(next) = self.child(node, byte) else {
                break;
            };
            node = next;
            if let Some(rule) = self.nodes[node].accept {
                best = Some(((i + 1) as u32, rule));
            }
        }
        best
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
