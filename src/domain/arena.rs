use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::domain::alphabet::Symbol;

/// Node of the code tree.
///
/// `letter` is `None` for nodes that only lie on the path to longer codes.
#[derive(Debug, Default, Clone)]
pub struct CodeNode {
    /// Letter assigned to the code ending at this node
    pub letter: Option<char>,
    /// Index of the child reached by a dot
    pub dot: Option<Index>,
    /// Index of the child reached by a dash
    pub dash: Option<Index>,
}

impl CodeNode {
    pub fn child(&self, symbol: Symbol) -> Option<Index> {
        match symbol {
            Symbol::Dot => self.dot,
            Symbol::Dash => self.dash,
        }
    }

    fn child_slot(&mut self, symbol: Symbol) -> &mut Option<Index> {
        match symbol {
            Symbol::Dot => &mut self.dot,
            Symbol::Dash => &mut self.dash,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.dot.is_none() && self.dash.is_none()
    }
}

/// Arena-based binary trie keyed by dot/dash sequences.
///
/// All nodes are owned by the arena and linked root-to-leaf by index.
/// Mutation is crate-private and only used by [`TreeBuilder`](crate::domain::TreeBuilder),
/// so a tree handed out by the builder is read-only and can be shared across threads.
#[derive(Debug)]
pub struct CodeTree {
    /// Arena storage for all tree nodes
    arena: Arena<CodeNode>,
    /// Index of the root node, which never carries a letter
    root: Index,
}

impl Default for CodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeTree {
    /// Creates a tree holding only an empty root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(CodeNode::default());
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&CodeNode> {
        self.arena.get(idx)
    }

    /// Returns the child of `parent` for `symbol`, creating an empty node if absent.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn child_or_insert(&mut self, parent: Index, symbol: Symbol) -> Index {
        if let Some(child) = self.arena.get(parent).and_then(|node| node.child(symbol)) {
            return child;
        }
        let child = self.arena.insert(CodeNode::default());
        if let Some(node) = self.arena.get_mut(parent) {
            *node.child_slot(symbol) = Some(child);
        }
        child
    }

    pub(crate) fn get_node_mut(&mut self, idx: Index) -> Option<&mut CodeNode> {
        self.arena.get_mut(idx)
    }

    /// Walks the tree along `code` and returns the letter at the final node.
    ///
    /// Returns `None` when a character is not a Morse symbol, when the path
    /// leaves the tree, or when the final node has no letter (the empty code
    /// ends at the root).
    #[instrument(level = "trace", skip(self))]
    pub fn lookup(&self, code: &str) -> Option<char> {
        let mut current = self.root;
        for c in code.chars() {
            let symbol = Symbol::from_char(c)?;
            current = self.arena.get(current)?.child(symbol)?;
        }
        let letter = self.arena.get(current)?.letter;
        if letter.is_none() {
            trace!("no letter at end of code");
        }
        letter
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Length of the longest path from the root, i.e. the longest code.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        self.get_node(node_idx)
            .map(|node| {
                Symbol::ALL
                    .iter()
                    .filter_map(|&symbol| node.child(symbol))
                    .map(|child| 1 + self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Collects every assigned `(code, letter)` pair in dot-first preorder.
    #[instrument(level = "debug", skip(self))]
    pub fn entries(&self) -> Vec<(String, char)> {
        let mut entries = Vec::new();
        let mut stack = vec![(self.root, String::new())];

        while let Some((idx, code)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            if let Some(letter) = node.letter {
                entries.push((code.clone(), letter));
            }
            // push dash first so the dot branch is visited first
            for symbol in Symbol::ALL.iter().rev() {
                if let Some(child) = node.child(*symbol) {
                    let mut child_code = code.clone();
                    child_code.push(symbol.as_char());
                    stack.push((child, child_code));
                }
            }
        }
        entries
    }
}
