// Hash engine module
// Accumulator registry and single-pass streaming over files and strings

use std::fs::File;
use std::io::Read;
use std::path::Path;

use blake2::{Blake2b512, Blake2s256};
use digest::{Digest, ExtendableOutput, Update, XofReader};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::catalog;
use crate::error::HashError;
use crate::progress::ProgressBar;

/// Fixed block size for streaming file reads
pub const BLOCK_SIZE: usize = 65536;

/// Trait for hash accumulator implementations
///
/// Fixed- and variable-length algorithms sit behind the same interface;
/// the length of a variable output is settled when the accumulator is
/// built, never at finalize time.
pub trait Hasher {
    /// Update the accumulator with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the accumulator and return the raw digest bytes
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

// Fixed-length accumulator over any RustCrypto digest
struct FixedHasher<D: Digest>(D);

impl<D: Digest> Hasher for FixedHasher<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }
}

// Extendable-output accumulator; output_len is fixed at construction from
// the bit-length suffix of the algorithm name
struct XofHasher<D: ExtendableOutput + Update> {
    state: D,
    output_len: usize,
}

impl<D: ExtendableOutput + Update> Hasher for XofHasher<D> {
    fn update(&mut self, data: &[u8]) {
        Update::update(&mut self.state, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        let mut reader = self.state.finalize_xof();
        let mut output = vec![0u8; self.output_len];
        XofReader::read(&mut reader, &mut output);
        output
    }

    fn output_size(&self) -> usize {
        self.output_len
    }
}

/// Registry for hash algorithms
pub struct HashRegistry;

impl HashRegistry {
    /// Get a fresh accumulator for the specified algorithm
    pub fn get_hasher(algorithm: &str) -> Result<Box<dyn Hasher>, HashError> {
        match algorithm {
            "blake2b" => Ok(Box::new(FixedHasher(Blake2b512::new()))),
            "blake2s" => Ok(Box::new(FixedHasher(Blake2s256::new()))),
            "md5" => Ok(Box::new(FixedHasher(Md5::new()))),
            "sha1" => Ok(Box::new(FixedHasher(Sha1::new()))),
            "sha224" => Ok(Box::new(FixedHasher(Sha224::new()))),
            "sha256" => Ok(Box::new(FixedHasher(Sha256::new()))),
            "sha384" => Ok(Box::new(FixedHasher(Sha384::new()))),
            "sha3_224" => Ok(Box::new(FixedHasher(Sha3_224::new()))),
            "sha3_256" => Ok(Box::new(FixedHasher(Sha3_256::new()))),
            "sha3_384" => Ok(Box::new(FixedHasher(Sha3_384::new()))),
            "sha3_512" => Ok(Box::new(FixedHasher(Sha3_512::new()))),
            "sha512" => Ok(Box::new(FixedHasher(Sha512::new()))),
            "shake_128" => Self::xof_hasher::<Shake128>(algorithm),
            "shake_256" => Self::xof_hasher::<Shake256>(algorithm),
            _ => Err(HashError::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
            }),
        }
    }

    fn xof_hasher<D>(algorithm: &str) -> Result<Box<dyn Hasher>, HashError>
    where
        D: ExtendableOutput + Update + Default + 'static,
    {
        // An extendable-output name whose suffix yields no length cannot
        // be hashed, so it is unsupported despite being in the match above
        let bits = catalog::xof_output_bits(algorithm).ok_or_else(|| {
            HashError::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
            }
        })?;
        Ok(Box::new(XofHasher {
            state: D::default(),
            output_len: bits / 8,
        }))
    }
}

/// Result of a hash computation
#[derive(Debug, Clone)]
pub struct HashResult {
    pub algorithm: String,
    pub hash: String, // hex-encoded
}

/// Streaming hash engine
///
/// Computes every requested digest in one pass over the input: each block
/// read from the source is fed to every accumulator before the next block
/// is read, so memory use stays bounded regardless of file size.
pub struct HashEngine;

impl HashEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute all requested digests over an in-memory payload
    ///
    /// One update call per accumulator, no chunking, no progress.
    pub fn hash_bytes(
        &self,
        data: &[u8],
        algorithms: &[String],
    ) -> Result<Vec<HashResult>, HashError> {
        let mut hashers = create_hashers(algorithms)?;

        for (_, hasher) in &mut hashers {
            hasher.update(data);
        }

        Ok(finalize_hashers(hashers))
    }

    /// Compute all requested digests over a file, streaming in fixed blocks
    ///
    /// When a progress bar is supplied it is ticked roughly once per 1% of
    /// the file's full blocks, plus once on the final full block, keeping
    /// terminal writes bounded for very large files.
    pub fn hash_file(
        &self,
        path: &Path,
        algorithms: &[String],
        mut progress: Option<&mut ProgressBar>,
    ) -> Result<Vec<HashResult>, HashError> {
        let mut hashers = create_hashers(algorithms)?;

        let mut file = File::open(path)
            .map_err(|e| HashError::from_io_error(e, "opening", Some(path.to_path_buf())))?;
        let total_size = file
            .metadata()
            .map_err(|e| HashError::from_io_error(e, "inspecting", Some(path.to_path_buf())))?
            .len();

        let total_blocks = total_size / BLOCK_SIZE as u64;
        let stride = (total_blocks / 100).max(1);

        let mut buffer = vec![0u8; BLOCK_SIZE];
        let mut block_index: u64 = 0;
        loop {
            let bytes_read = file
                .read(&mut buffer)
                .map_err(|e| HashError::from_io_error(e, "reading", Some(path.to_path_buf())))?;
            if bytes_read == 0 {
                break;
            }

            for (_, hasher) in &mut hashers {
                hasher.update(&buffer[..bytes_read]);
            }

            block_index += 1;
            if block_index % stride == 0 || block_index == total_blocks {
                if let Some(bar) = progress.as_deref_mut() {
                    // A trailing partial block pushes the fraction past
                    // 1.0; the bar rejects it, so the last accepted tick
                    // is exactly 1.0 on the final full block
                    let fraction = block_index as f64 / total_blocks.max(1) as f64;
                    bar.render(fraction)
                        .map_err(|e| HashError::from_io_error(e, "rendering progress", None))?;
                }
            }
        }

        Ok(finalize_hashers(hashers))
    }
}

// One fresh accumulator per requested algorithm, in request order.
// Failure for any single name aborts the whole call; resolution should
// have caught bad names already, but the registry re-checks.
fn create_hashers(algorithms: &[String]) -> Result<Vec<(String, Box<dyn Hasher>)>, HashError> {
    let mut hashers: Vec<(String, Box<dyn Hasher>)> = Vec::new();
    for algorithm in algorithms {
        let hasher = HashRegistry::get_hasher(algorithm)?;
        hashers.push((algorithm.clone(), hasher));
    }
    Ok(hashers)
}

fn finalize_hashers(hashers: Vec<(String, Box<dyn Hasher>)>) -> Vec<HashResult> {
    let mut results = Vec::new();
    for (algorithm, hasher) in hashers {
        let hash_bytes = hasher.finalize();
        results.push(HashResult {
            algorithm,
            hash: hex::encode(hash_bytes),
        });
    }
    results
}
