//! Command-line option groups shared by the binary and the library entry point.

use clap::Args;
use outline_core::OutlineOption;

/// What the walker collects.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanOptions {
    /// Also collect declarations nested inside functions, initializers and
    /// deinitializers (their local variables are still skipped).
    #[arg(long)]
    pub deep: bool,

    /// Attach an inferred type label to every variable.
    #[arg(long = "show-type")]
    pub show_type: bool,
}

/// How inputs are found and processed.
#[derive(Args, Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Scan directories recursively instead of one level deep.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Process files one at a time on the calling thread.
    #[arg(long)]
    pub sequential: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    pub fn with_show_type(mut self, show_type: bool) -> Self {
        self.show_type = show_type;
        self
    }

    pub fn outline_option(&self) -> OutlineOption {
        OutlineOption::new()
            .with_deep_scan(self.deep)
            .with_show_type(self.show_type)
    }
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }
}
