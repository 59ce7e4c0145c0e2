//! swift-outline command-line interface.
//!
pub mod discovery;
pub mod options;
pub mod output;
pub mod pipeline;

use std::collections::HashSet;

use outline_core::{LanguageParser, Result};

pub use options::{ProcessingOptions, ScanOptions};
pub use output::{FileResult, render_json};
pub use pipeline::process_files;

/// Options for one outline run.
#[derive(Debug, Clone, Default)]
pub struct OutlineOptions {
    /// Files and directories to outline, as given on the command line.
    pub inputs: Vec<String>,
    pub scan: ScanOptions,
    pub processing: ProcessingOptions,
    pub output: Option<String>,
}

impl OutlineOptions {
    pub fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    pub fn with_scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_processing(mut self, processing: ProcessingOptions) -> Self {
        self.processing = processing;
        self
    }
}

/// Main entry point: discover, outline and render as JSON.
pub fn run_main<L: LanguageParser>(opts: &OutlineOptions) -> Result<String> {
    let extensions: HashSet<&str> = L::supported_extensions().iter().copied().collect();

    let files = discovery::discover_files(opts, &extensions)?;
    let results = process_files::<L>(opts, &files)?;
    render_json(&results)
}
