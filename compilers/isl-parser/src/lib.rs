pub mod lexer;
pub mod token;
pub mod tree;

pub use lexer::{tokenize, words};
pub use token::{Span, Token};
pub use tree::{parse_forest, parse_tree, TreeSyntaxError};
