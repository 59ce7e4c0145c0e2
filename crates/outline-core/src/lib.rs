//! Hierarchical symbol outlines over parsed syntax trees.
//!
//! A language binding implements [`ParseNode`] for its parser's nodes; the
//! [`OutlineCollector`] walks such a tree once and produces nested [`Symbol`]s.
pub mod collect;
pub mod infer;
#[macro_use]
pub mod lang_def;
pub mod position;
pub mod scope;
pub mod symbol;
pub mod testing;

pub use collect::{OutlineCollector, OutlineOption, collect_outline};
pub use infer::infer_type;
pub use lang_def::{Binding, LanguageParser, LanguageTrait, NodeKind, ParseNode};
pub use outline_error::{Error, ErrorKind, Result};
pub use paste;
pub use position::{LineIndex, PositionResolver};
pub use scope::ScopeStack;
pub use symbol::{SymKind, Symbol};
