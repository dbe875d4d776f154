//! Tree builder for turning an alphabet table into a code tree.

use tracing::{debug, instrument};

use crate::domain::alphabet::{Symbol, ALPHABET};
use crate::domain::arena::CodeTree;
use crate::domain::error::{DomainError, DomainResult};

/// Constructs a [`CodeTree`] one `(letter, code)` pair at a time.
///
/// The tree stays owned by the builder while it is mutable; [`TreeBuilder::build`]
/// hands it out read-only.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: CodeTree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: CodeTree::new(),
        }
    }

    /// Insert `letter` at the node addressed by `code`, creating the path as needed.
    ///
    /// Codes are validated before the tree is touched, so a rejected code leaves
    /// no partial path behind.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, letter: char, code: &str) -> DomainResult<()> {
        if code.is_empty() {
            return Err(DomainError::EmptyCode(letter));
        }
        let symbols = code
            .chars()
            .map(|c| {
                Symbol::from_char(c).ok_or_else(|| DomainError::InvalidSymbol {
                    letter,
                    code: code.to_string(),
                    symbol: c,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let mut current = self.tree.root();
        for symbol in symbols {
            current = self.tree.child_or_insert(current, symbol);
        }

        if let Some(node) = self.tree.get_node_mut(current) {
            if let Some(existing) = node.letter {
                return Err(DomainError::DuplicateCode {
                    code: code.to_string(),
                    existing,
                    letter,
                });
            }
            node.letter = Some(letter);
        }
        Ok(())
    }

    /// Chaining variant of [`TreeBuilder::insert`].
    pub fn with_entry(mut self, letter: char, code: &str) -> DomainResult<Self> {
        self.insert(letter, code)?;
        Ok(self)
    }

    pub fn build(self) -> CodeTree {
        debug!(
            "build: {} nodes, depth {}",
            self.tree.node_count(),
            self.tree.depth()
        );
        self.tree
    }

    /// Build a tree from a complete alphabet table.
    pub fn from_alphabet(alphabet: &[(char, &str)]) -> DomainResult<CodeTree> {
        let mut builder = Self::new();
        for (letter, code) in alphabet {
            builder.insert(*letter, code)?;
        }
        Ok(builder.build())
    }
}

impl CodeTree {
    /// The tree for the built-in A-Z alphabet.
    pub fn morse() -> Self {
        // the built-in table has unique, well-formed codes; covered by tests
        TreeBuilder::from_alphabet(&ALPHABET).expect("built-in alphabet is well-formed")
    }
}
