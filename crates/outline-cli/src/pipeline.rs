//! Batch pipeline: read → parse → outline, one independent walk per file.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use outline_core::{Error, LanguageParser, OutlineOption, Result, Symbol};

use crate::OutlineOptions;
use crate::output::FileResult;

/// Report an input that is being skipped, on the log and on stderr.
pub(crate) fn report_skipped(path: &str, err: &Error) {
    warn!(path, kind = %err.kind(), error = %err.message(), "skipping input");
    eprintln!("Warning: Failed to read file: {path} ({})", err.message());
}

/// Outline a single file.
pub fn outline_file<L: LanguageParser>(path: &str, option: &OutlineOption) -> Result<Vec<Symbol>> {
    let source = std::fs::read(path).map_err(|err| {
        Error::from(err)
            .with_operation("pipeline::outline_file")
            .with_context("path", path)
    })?;

    let start = Instant::now();
    let symbols = L::outline(&source, option).map_err(|err| err.with_context("path", path))?;
    debug!(
        path,
        symbols = symbols.len(),
        secs = start.elapsed().as_secs_f64(),
        "outlined"
    );
    Ok(symbols)
}

/// Outline every file, in parallel unless `sequential` is set.
///
/// Results keep the order of `files`. Inputs that cannot be read or decoded
/// are reported and skipped; any other failure aborts the batch.
pub fn process_files<L>(opts: &OutlineOptions, files: &[String]) -> Result<Vec<FileResult>>
where
    L: LanguageParser,
{
    let option = opts.scan.outline_option();
    let start = Instant::now();
    info!("Outlining {} {} files", files.len(), L::name());

    let outlines: Vec<Result<Vec<Symbol>>> = if opts.processing.sequential {
        files
            .iter()
            .map(|file| outline_file::<L>(file, &option))
            .collect()
    } else {
        files
            .par_iter()
            .map(|file| outline_file::<L>(file, &option))
            .collect()
    };

    let mut results = Vec::with_capacity(files.len());
    for (file, outline) in files.iter().zip(outlines) {
        match outline {
            Ok(symbols) => results.push(FileResult::new(file.clone(), symbols)),
            Err(err) if err.is_input_local() => report_skipped(file, &err),
            Err(err) => return Err(err),
        }
    }

    info!(
        "Outline: {:.2}s ({} of {} files)",
        start.elapsed().as_secs_f64(),
        results.len(),
        files.len()
    );
    Ok(results)
}
