//! JSON rendering of outline results.

use serde::Serialize;

use outline_core::{Error, ErrorKind, Result, Symbol};

/// Outline of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub file: String,
    pub symbols: Vec<Symbol>,
}

impl FileResult {
    pub fn new(file: impl Into<String>, symbols: Vec<Symbol>) -> Self {
        Self {
            file: file.into(),
            symbols,
        }
    }
}

/// Render results as pretty-printed JSON.
///
/// A single result is rendered as its bare symbol list; otherwise as a list
/// of `{ "file", "symbols" }` objects.
pub fn render_json(results: &[FileResult]) -> Result<String> {
    let rendered = match results {
        [single] => serde_json::to_string_pretty(&single.symbols),
        _ => serde_json::to_string_pretty(results),
    };
    rendered.map_err(|err| {
        Error::new(ErrorKind::SerializationFailed, "Failed to encode output")
            .with_operation("output::render_json")
            .set_source(err)
    })
}
