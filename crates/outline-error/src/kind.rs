//! Error kinds for outline operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide whether an input can be skipped
/// (unreadable or undecodable source) or whether the whole run must stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or command-line options
    ConfigInvalid,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// The parser could not produce a tree for the source
    ParseFailed,

    /// Source is not valid UTF-8
    EncodingError,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,

    // =========================================================================
    // Language errors
    // =========================================================================
    /// Unsupported language
    UnsupportedLanguage,

    /// Tree-sitter grammar could not be loaded
    GrammarError,

    // =========================================================================
    // Output errors
    // =========================================================================
    /// Serialization failed
    SerializationFailed,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether an error of this kind only affects the input it was raised for.
    ///
    /// Batch processing reports such errors as warnings and moves on to the
    /// next input.
    pub fn is_input_local(&self) -> bool {
        matches!(
            self,
            ErrorKind::FileNotFound
                | ErrorKind::PermissionDenied
                | ErrorKind::IoFailed
                | ErrorKind::EncodingError
                | ErrorKind::ParseFailed
        )
    }
}
