//! Swift language binding for outline extraction, built on tree-sitter.
#[macro_use]
extern crate outline_core;

mod lang;
pub mod node;
pub mod token;

pub use lang::parse;
pub use node::SwiftNode;
pub use token::LangSwift;
