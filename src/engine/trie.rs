//! Character trie over lowercase dictionary keys
//!
//! Nodes live in a flat arena and refer to each other by index. Each node
//! records which dictionary entries end exactly there, so a single walk
//! answers both "is this a word" and "is this a prefix of any word".

use rustc_hash::FxHashMap;

/// Handle to a node inside a [`PrefixIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    terminals: Vec<usize>,
}

/// Prefix index mapping keys to entry ids
#[derive(Debug)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
}

impl PrefixIndex {
    /// The empty prefix
    pub const ROOT: NodeId = NodeId(0);

    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Record that entry `entry` has key `key`
    pub fn insert(&mut self, key: &str, entry: usize) {
        let mut current = Self::ROOT;
        for ch in key.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(Node::default());
                    self.nodes[current.0].children.insert(ch, next);
                    next
                }
            };
        }
        self.nodes[current.0].terminals.push(entry);
    }

    /// Step from `node` along one character
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&ch).copied()
    }

    /// Walk the whole prefix from the root
    ///
    /// Returns `None` as soon as no key continues with the next character.
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, ch| self.child(node, ch))
    }

    /// Entries whose key ends exactly at `node`
    #[inline]
    #[must_use]
    pub fn terminals(&self, node: NodeId) -> &[usize] {
        &self.nodes[node.0].terminals
    }

    /// Every entry whose key passes through `node`
    #[must_use]
    pub fn subtree(&self, node: NodeId) -> Vec<usize> {
        let mut entries = Vec::new();
        let mut stack = vec![node];
        while let Some(NodeId(i)) = stack.pop() {
            let current = &self.nodes[i];
            entries.extend_from_slice(&current.terminals);
            stack.extend(current.children.values().copied());
        }
        entries
    }

    /// Number of nodes, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}
