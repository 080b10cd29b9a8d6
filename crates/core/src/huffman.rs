//! Huffman tree construction, prefix-code tables, and the text codec.
//!
//! Construction follows the classic greedy algorithm: start with one leaf
//! per distinct symbol, repeatedly merge the two lightest nodes, and read
//! codewords off root-to-leaf paths (left edge = 0, right edge = 1).
//!
//! # Tie-breaking
//!
//! When several nodes share the minimum weight, the heap orders them by an
//! insertion sequence number: leaves are numbered in first-encounter order
//! and merged nodes continue the count. The earliest-created node always
//! wins, so the tree shape is reproducible across runs and platforms. Of
//! the two nodes popped for a merge, the first becomes the left child.
//!
//! # Degenerate input
//!
//! Text with exactly one distinct symbol produces a tree that is a single
//! leaf. A root-to-leaf walk over that tree would yield an empty codeword,
//! so the lone symbol is assigned the 1-bit word "0" instead.

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A node of the code tree: a leaf holding one symbol, or an internal node
/// owning exactly two children.
#[derive(Debug, Clone)]
pub enum Node {
    /// Terminal node for a single symbol
    Leaf {
        /// The symbol this leaf encodes
        symbol: char,
        /// Aggregated occurrence count
        weight: u64,
    },
    /// Binary branch; weight is the sum of both children's weights
    Internal {
        /// Combined weight of the subtree
        weight: u64,
        /// Subtree reached by appending 0
        left: Box<Node>,
        /// Subtree reached by appending 1
        right: Box<Node>,
    },
}

impl Node {
    /// Weight of this node (leaf count or subtree sum).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Merge two nodes into an internal parent.
    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Candidate node in the construction heap.
///
/// Ordered by `(weight, seq)`, reversed so the `BinaryHeap` pops the
/// smallest first. `seq` fixes the tie-break deterministically.
struct Candidate {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest (weight, seq) first
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An optimal binary prefix-code tree for a symbol distribution.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
    /// Symbols in frequency-table (first-encounter) order, used to give the
    /// derived code table a stable iteration order
    order: Vec<char>,
}

impl HuffmanTree {
    /// Build a tree from the symbol distribution of `text`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `text` has no symbols.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_text(text))
    }

    /// Build a tree from an existing frequency table.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if the table is empty.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Result<Self> {
        if freqs.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut heap = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0u64;

        for (symbol, weight) in freqs.iter() {
            heap.push(Candidate {
                weight,
                seq,
                node: Node::Leaf { symbol, weight },
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let first = heap.pop().unwrap();
            let second = heap.pop().unwrap();

            let node = Node::merge(first.node, second.node);
            heap.push(Candidate {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        }

        // Non-empty: the emptiness guard above ensures at least one leaf
        let root = heap.pop().unwrap().node;

        Ok(Self {
            root,
            order: freqs.iter().map(|(symbol, _)| symbol).collect(),
        })
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Derive the prefix-code table from root-to-leaf paths.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = HashMap::with_capacity(self.order.len());

        match &self.root {
            Node::Leaf { symbol, .. } => {
                // Single-symbol input: assign "0" rather than the empty
                // word a root-is-leaf walk would produce
                let mut word = BitString::new();
                word.push(false);
                codes.insert(*symbol, word);
            }
            root => collect_codes(root, BitString::new(), &mut codes),
        }

        CodeTable {
            codes,
            order: self.order.clone(),
        }
    }
}

/// Depth-first walk accumulating one bit per edge; leaves record the
/// accumulated word.
fn collect_codes(node: &Node, prefix: BitString, codes: &mut HashMap<char, BitString>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            collect_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(true);
            collect_codes(right, right_prefix, codes);
        }
    }
}

/// Bijective mapping from symbol to codeword.
///
/// Prefix-free by construction: codewords are leaf paths of a binary tree,
/// and the single-symbol case is assigned a 1-bit word explicitly.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: HashMap<char, BitString>,
    order: Vec<char>,
}

impl CodeTable {
    /// Convenience: build the tree for `text` and derive its code table.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `text` has no symbols.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(HuffmanTree::from_text(text)?.code_table())
    }

    /// Codeword for `symbol`, or `None` if the table doesn't cover it.
    pub fn get(&self, symbol: char) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    /// Number of symbols covered.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the table covers no symbols.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(symbol, codeword)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitString)> + '_ {
        self.order.iter().map(move |&symbol| (symbol, &self.codes[&symbol]))
    }

    /// Human-readable listing: `A: 0, B: 10, C: 11`.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(symbol, word)| format!("{}: {}", symbol, word))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Encode `text` by concatenating codewords in input order.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for the first symbol of `text` with
    /// no entry in this table. Cannot occur when the table was derived from
    /// the same text.
    pub fn encode(&self, text: &str) -> Result<BitString> {
        let mut bits = BitString::new();
        for symbol in text.chars() {
            let word = self
                .codes
                .get(&symbol)
                .ok_or(Error::UnknownSymbol { symbol })?;
            bits.extend(word);
        }
        Ok(bits)
    }

    /// Decode a bitstring by scanning left to right.
    ///
    /// Bits accumulate into a candidate word; on an exact codeword match
    /// the symbol is emitted and the candidate resets. Never fails: bits
    /// that match no codeword (a corrupted stream, or a trailing fragment
    /// cut mid-codeword) are silently discarded, so a noisy input may
    /// decode to fewer symbols than were encoded, or to different ones.
    pub fn decode(&self, bits: &BitString) -> String {
        let reverse: HashMap<&BitString, char> = self
            .codes
            .iter()
            .map(|(&symbol, word)| (word, symbol))
            .collect();

        let mut decoded = String::new();
        let mut candidate = BitString::new();

        for bit in bits.iter() {
            candidate.push(bit);
            if let Some(&symbol) = reverse.get(&candidate) {
                decoded.push(symbol);
                candidate.clear();
            }
        }

        decoded
    }
}
