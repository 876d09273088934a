use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::ordered_list::OrderedList;
use std::cmp::Ordering;
use tracing::debug;

/// A node of the code tree.
///
/// Leaves carry a real byte. An internal node always owns exactly two
/// children; its `symbol` is the smallest byte found beneath it and is only
/// used to break frequency ties.
#[derive(Debug, Clone)]
pub struct HuffmanNode {
    symbol: u8,
    freq: u64,
    children: Option<Box<(HuffmanNode, HuffmanNode)>>,
}

impl HuffmanNode {
    pub fn leaf(symbol: u8, freq: u64) -> Self {
        HuffmanNode {
            symbol,
            freq,
            children: None,
        }
    }

    /// `low` becomes the left child and `second` the right one.
    pub fn merge(low: Self, second: Self) -> Self {
        HuffmanNode {
            symbol: low.symbol.min(second.symbol),
            freq: low.freq.saturating_add(second.freq),
            children: Some(Box::new((low, second))),
        }
    }

    pub fn symbol(&self) -> u8 {
        self.symbol
    }

    pub fn freq(&self) -> u64 {
        self.freq
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn left(&self) -> Option<&HuffmanNode> {
        self.children.as_deref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&HuffmanNode> {
        self.children.as_deref().map(|(_, right)| right)
    }

    /// `(left, right)` of an internal node.
    pub fn branches(&self) -> Option<&(HuffmanNode, HuffmanNode)> {
        self.children.as_deref()
    }

    /// Splits an internal node into its children; a leaf comes back as `Err`.
    pub fn into_branches(self) -> std::result::Result<Box<(HuffmanNode, HuffmanNode)>, HuffmanNode> {
        match self.children {
            Some(children) => Ok(children),
            None => Err(HuffmanNode::leaf(self.symbol, self.freq)),
        }
    }

    fn depth(&self) -> usize {
        match self.children.as_deref() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 0,
        }
    }
}

// Nodes are ordered and compared by (freq, symbol) only; subtrees are ignored.
impl PartialEq for HuffmanNode {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.symbol == other.symbol
    }
}

impl Eq for HuffmanNode {}

impl Ord for HuffmanNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq
            .cmp(&other.freq)
            .then_with(|| self.symbol.cmp(&other.symbol))
    }
}

impl PartialOrd for HuffmanNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two smallest nodes.
    ///
    /// Returns `None` for an all-zero table. With a single distinct byte the
    /// root is that byte's leaf. The shape depends only on the table, so the
    /// decoder rebuilds exactly the encoder's tree from the header.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Option<Self>> {
        let mut queue: OrderedList<HuffmanNode> = table
            .iter()
            .map(|(symbol, count)| HuffmanNode::leaf(symbol, count))
            .collect();

        while queue.size() > 1 {
            let low = queue.pop(0)?;
            let second = queue.pop(0)?;
            let merged = HuffmanNode::merge(low, second);
            // Tie-break keys stay unique: every byte sits under exactly one queued node.
            let inserted = queue.add(merged);
            debug_assert!(inserted);
        }

        if queue.is_empty() {
            return Ok(None);
        }
        let root = queue.pop(0)?;
        debug!(
            symbols = table.distinct(),
            weight = root.freq(),
            depth = root.depth(),
            "built huffman tree"
        );
        Ok(Some(HuffmanTree { root }))
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    pub fn into_root(self) -> HuffmanNode {
        self.root
    }
}
