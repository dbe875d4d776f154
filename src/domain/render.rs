//! Conversion of the code tree into a printable `termtree`.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::alphabet::Symbol;
use crate::domain::arena::CodeTree;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for CodeTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &CodeTree, node_idx: Index, code: &str, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for symbol in Symbol::ALL {
                    if let Some(child_idx) = node.child(symbol) {
                        let child_code = format!("{code}{symbol}");
                        let label = match arena.get_node(child_idx).and_then(|c| c.letter) {
                            Some(letter) => format!("{child_code} {letter}"),
                            None => child_code.clone(),
                        };
                        let mut child_tree = Tree::new(label);
                        build_tree(arena, child_idx, &child_code, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let mut tree = Tree::new("root".to_string());
        build_tree(self, self.root(), "", &mut tree);
        tree
    }
}
