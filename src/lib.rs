// Library module for polyhash
// Streaming multi-algorithm hashing over files and strings

pub mod catalog;
pub mod engine;
pub mod error;
pub mod progress;
pub mod resolver;
pub mod wildcard;

// Re-export commonly used types for convenience
pub use catalog::AlgorithmInfo;
pub use engine::{HashEngine, HashRegistry, HashResult, Hasher, BLOCK_SIZE};
pub use error::HashError;
pub use progress::ProgressBar;
