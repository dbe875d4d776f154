//! Domain layer: the Morse alphabet and its code tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod alphabet;
pub mod arena;
pub mod builder;
pub mod error;
pub mod render;

pub use alphabet::{Symbol, ALPHABET, DASH, DOT};
pub use arena::{CodeNode, CodeTree};
pub use builder::TreeBuilder;
pub use error::{DomainError, DomainResult};
pub use render::TreeNodeConvert;
