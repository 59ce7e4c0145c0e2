use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use outline_cli::{OutlineOptions, ProcessingOptions, ScanOptions, run_main};
use outline_core::{Error, Result};
use outline_swift::LangSwift;

#[derive(Parser, Debug)]
#[command(
    name = "swift-outline",
    about = "Hierarchical symbol outlines of Swift sources, as JSON",
    version
)]
pub struct Cli {
    /// Swift files or directories to outline
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    paths: Vec<String>,

    #[command(flatten)]
    scan: ScanOptions,

    #[command(flatten)]
    processing: ProcessingOptions,

    /// Source language
    #[arg(long, value_name = "LANG", default_value = "swift")]
    lang: String,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = OutlineOptions {
        inputs: args.paths,
        scan: args.scan,
        processing: args.processing,
        output: args.output,
    };

    let output = match args.lang.as_str() {
        "swift" => run_main::<LangSwift>(&opts)?,
        other => return Err(Error::unsupported_language(other)),
    };

    if let Some(ref path) = opts.output {
        std::fs::write(path, format!("{output}\n"))
            .map_err(|err| Error::from(err).with_context("path", path.as_str()))?;
        tracing::info!(path, "output written");
    } else {
        println!("{output}");
    }

    tracing::info!(total_secs = total_start.elapsed().as_secs_f64(), "complete");
    Ok(())
}

pub fn main() {
    let args = Cli::parse();
    if let Err(err) = run(args) {
        tracing::error!(error = %err, "execution failed");
        eprintln!("Error: {}", err.message());
        std::process::exit(1);
    }
}
