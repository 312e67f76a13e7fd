// Algorithm resolution module
// Expands user-supplied tokens into a concrete, deduplicated algorithm list

use crate::catalog;
use crate::error::HashError;

/// Algorithms used when the caller supplies no tokens at all
pub const DEFAULT_ALGORITHMS: [&str; 3] = ["md5", "sha1", "sha256"];

/// Resolve a raw token list into concrete algorithm names
///
/// Tokens may be literal catalog names, group names ("sha", "sha3",
/// "blake", "shake"), or the sentinel "all". Group tokens expand in place;
/// duplicates keep their first position. If "all" appears anywhere the
/// result is the whole catalog and every other token is ignored, valid or
/// not. The first token that is neither a group nor a catalog name fails
/// the entire resolution, so no partial hashing can happen downstream.
pub fn resolve(tokens: &[String]) -> Result<Vec<String>, HashError> {
    if tokens.is_empty() {
        return Ok(DEFAULT_ALGORITHMS.iter().map(|name| name.to_string()).collect());
    }

    if tokens.iter().any(|token| token == "all") {
        return Ok(catalog::algorithms()
            .iter()
            .map(|info| info.name.to_string())
            .collect());
    }

    let mut resolved: Vec<String> = Vec::new();
    for token in tokens {
        if let Some(members) = catalog::group_members(token) {
            for info in members {
                push_unique(&mut resolved, info.name);
            }
        } else if catalog::lookup(token).is_some() {
            push_unique(&mut resolved, token);
        } else {
            return Err(HashError::UnsupportedAlgorithm {
                algorithm: token.clone(),
            });
        }
    }

    Ok(resolved)
}

fn push_unique(resolved: &mut Vec<String>, name: &str) {
    if !resolved.iter().any(|existing| existing == name) {
        resolved.push(name.to_string());
    }
}
