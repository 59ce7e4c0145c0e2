//! Input discovery: explicit files and directory scans.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{debug, info};

use outline_core::{Error, ErrorKind, Result};

use crate::OutlineOptions;
use crate::pipeline::report_skipped;

/// Whether `path` has one of the given extensions.
fn has_extension(path: &Path, extensions: &HashSet<&str>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(ext))
}

/// Collect source files with a supported extension from a directory.
///
/// Hidden entries and ignore files are honored. Without `recursive` only the
/// directory's own entries are considered.
fn walk_dir(
    dir: &Path,
    recursive: bool,
    extensions: &HashSet<&str>,
    add_path: &mut impl FnMut(&Path),
) {
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(true)
        .follow_links(false)
        .max_depth(if recursive { None } else { Some(1) });

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let err = Error::new(ErrorKind::TraversalFailed, err.to_string())
                    .with_operation("discovery::walk_dir")
                    .with_context("path", dir.display().to_string())
                    .set_source(err);
                report_skipped(&dir.display().to_string(), &err);
                continue;
            }
        };

        // Only process files
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if has_extension(entry.path(), extensions) {
            add_path(entry.path());
        }
    }
}

/// Discover source files for every input.
///
/// A file input is kept only with a supported extension; a directory is
/// scanned. Results are deduplicated and sorted by path. Finding nothing at
/// all is an error.
pub fn discover_files(opts: &OutlineOptions, extensions: &HashSet<&str>) -> Result<Vec<String>> {
    let discovery_start = Instant::now();

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    let mut add_path = |path: &Path| {
        let path = path.to_string_lossy().into_owned();
        if seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for input in &opts.inputs {
        let path = Path::new(input);
        if path.is_dir() {
            walk_dir(path, opts.processing.recursive, extensions, &mut add_path);
        } else if path.is_file() && has_extension(path, extensions) {
            add_path(path);
        } else {
            debug!(input, "input is neither a directory nor a supported file");
        }
    }

    files.sort();

    info!(
        "File discovery: {:.2}s ({} files)",
        discovery_start.elapsed().as_secs_f64(),
        files.len()
    );

    if files.is_empty() {
        let inputs = opts.inputs.join(", ");
        return Err(Error::new(
            ErrorKind::FileNotFound,
            format!("No Swift files found at: {inputs}"),
        )
        .with_operation("discovery::discover_files")
        .with_context("inputs", inputs));
    }

    Ok(files)
}
