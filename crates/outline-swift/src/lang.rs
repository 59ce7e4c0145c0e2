use std::cell::RefCell;

use outline_core::{
    Error, LanguageParser, LineIndex, OutlineOption, Result, Symbol, collect_outline,
};
use tracing::debug;
use tree_sitter::{Parser, Tree};

use crate::node::SwiftNode;
use crate::token::LangSwift;

thread_local! {
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Parse Swift source with this thread's parser, creating it on first use.
pub fn parse(source: &[u8]) -> Result<Tree> {
    PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(new_parser()?);
        }
        let Some(parser) = slot.as_mut() else {
            return Err(Error::unexpected("Swift parser unavailable"));
        };
        parser
            .parse(source, None)
            .ok_or_else(|| Error::parse_failed("tree-sitter returned no tree for Swift source"))
    })
}

fn new_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_swift::LANGUAGE.into())
        .map_err(|err| Error::grammar("failed to load the Swift grammar").set_source(err))?;
    Ok(parser)
}

impl LanguageParser for LangSwift {
    fn name() -> &'static str {
        "swift"
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["swift"]
    }

    fn outline(source: &[u8], option: &OutlineOption) -> Result<Vec<Symbol>> {
        std::str::from_utf8(source).map_err(|err| {
            Error::encoding("source is not valid UTF-8").set_source(err)
        })?;

        let tree = parse(source).map_err(|err| err.with_operation("swift::outline"))?;
        let root = tree.root_node();
        if root.has_error() {
            debug!("syntax errors in Swift source, outlining recovered tree");
        }

        let index = LineIndex::new(source);
        let symbols = collect_outline(SwiftNode::new(root, source), &index, *option);
        Ok(symbols)
    }
}
