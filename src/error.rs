// Error handling module
// Context-carrying error types for resolution, hashing, and CLI failures

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the hashing utility
/// Carries enough context to print an actionable message
#[derive(Debug)]
pub enum HashError {
    /// File system errors with context
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Algorithm resolution errors
    UnsupportedAlgorithm { algorithm: String },

    /// Input selection errors
    MissingInput { message: String },
    NotAFile { path: PathBuf },

    /// CLI errors
    InvalidArguments { message: String },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // File system errors
            HashError::FileNotFound { path } => {
                write!(f, "File not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            HashError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied while {} file: {}\n", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            HashError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} file {}: {}\n", operation, p.display(), source)?;
                } else {
                    write!(f, "I/O error while {}: {}\n", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }

            // Algorithm resolution errors
            HashError::UnsupportedAlgorithm { algorithm } => {
                write!(f, "Unsupported hash algorithm: {}\n", algorithm)?;
                write!(f, "Suggestion: Use --list-algorithms to see available algorithms")
            }

            // Input selection errors
            HashError::MissingInput { message } => {
                write!(f, "{}\n", message)?;
                write!(f, "Suggestion: Run with --help to see usage information")
            }
            HashError::NotAFile { path } => {
                write!(f, "Not a regular file: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the path points to a file rather than a directory")
            }

            // CLI errors
            HashError::InvalidArguments { message } => {
                write!(f, "Invalid arguments: {}\n", message)?;
                write!(f, "Suggestion: Run with --help to see usage information")
            }
        }
    }
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Conversion from io::Error with context
impl HashError {
    /// Create an IoError with context about the operation and optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        // Check for specific error kinds and provide more specific errors
        match err.kind() {
            io::ErrorKind::NotFound => {
                if let Some(p) = path {
                    HashError::FileNotFound { path: p }
                } else {
                    HashError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            io::ErrorKind::PermissionDenied => {
                if let Some(p) = path {
                    HashError::PermissionDenied {
                        path: p,
                        operation: operation.to_string(),
                    }
                } else {
                    HashError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            _ => HashError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

// Default From implementation for io::Error (without context)
impl From<io::Error> for HashError {
    fn from(err: io::Error) -> Self {
        HashError::from_io_error(err, "unknown operation", None)
    }
}
