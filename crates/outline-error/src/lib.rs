//! # outline-error
//!
//! Unified error handling for swift-outline.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. `ParseFailed`, `EncodingError`)
//! - **Error context**: the operation plus key/value pairs that locate the cause
//! - **Error source**: the wrapped underlying error, without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use outline_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "tree-sitter returned no tree")
//!         .with_operation("swift::parse")
//!         .with_context("file", "Sources/App.swift"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, outline_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - An error is handled once; callers further up only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the outline Error
pub type Result<T> = std::result::Result<T, Error>;
