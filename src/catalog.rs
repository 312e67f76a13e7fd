// Algorithm catalog module
// Enumerates the supported algorithms and derives named groups from them

/// Information about a supported hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub output_bits: usize,
    /// Extendable-output function: digest length chosen at finalize time
    pub extendable: bool,
}

/// Group tokens the resolver recognizes, besides the "all" sentinel
pub const GROUPS: [&str; 4] = ["sha", "sha3", "blake", "shake"];

// Sorted ascending by name; "all" expansion relies on this order.
// output_bits for extendable algorithms is the default implied by the
// bit-length suffix of the name.
const CATALOG: [AlgorithmInfo; 14] = [
    AlgorithmInfo { name: "blake2b", output_bits: 512, extendable: false },
    AlgorithmInfo { name: "blake2s", output_bits: 256, extendable: false },
    AlgorithmInfo { name: "md5", output_bits: 128, extendable: false },
    AlgorithmInfo { name: "sha1", output_bits: 160, extendable: false },
    AlgorithmInfo { name: "sha224", output_bits: 224, extendable: false },
    AlgorithmInfo { name: "sha256", output_bits: 256, extendable: false },
    AlgorithmInfo { name: "sha384", output_bits: 384, extendable: false },
    AlgorithmInfo { name: "sha3_224", output_bits: 224, extendable: false },
    AlgorithmInfo { name: "sha3_256", output_bits: 256, extendable: false },
    AlgorithmInfo { name: "sha3_384", output_bits: 384, extendable: false },
    AlgorithmInfo { name: "sha3_512", output_bits: 512, extendable: false },
    AlgorithmInfo { name: "sha512", output_bits: 512, extendable: false },
    AlgorithmInfo { name: "shake_128", output_bits: 128, extendable: true },
    AlgorithmInfo { name: "shake_256", output_bits: 256, extendable: true },
];

/// All supported algorithms, sorted by name
pub fn algorithms() -> &'static [AlgorithmInfo] {
    &CATALOG
}

/// Look up a catalog entry by its exact (case-sensitive) name
pub fn lookup(name: &str) -> Option<&'static AlgorithmInfo> {
    CATALOG.iter().find(|info| info.name == name)
}

/// Check whether a token names a group rather than a single algorithm
pub fn is_group(token: &str) -> bool {
    GROUPS.contains(&token)
}

/// Expand a group token into its member algorithms
///
/// Membership is recomputed from the catalog on every call; groups carry
/// no state of their own. Returns None for tokens that are not groups.
pub fn group_members(token: &str) -> Option<Vec<&'static AlgorithmInfo>> {
    if !is_group(token) {
        return None;
    }
    let members = CATALOG
        .iter()
        .filter(|info| in_group(info.name, token))
        .collect();
    Some(members)
}

// Substring rules defining group membership. The "sha" group excludes
// underscored names so sha3_* and shake_* stay out of it.
fn in_group(name: &str, group: &str) -> bool {
    match group {
        "sha" => name.contains("sha") && !name.contains('_'),
        "sha3" => name.contains("sha3_"),
        "blake" => name.contains("blake"),
        "shake" => name.contains("shake"),
        _ => false,
    }
}

/// Derive an extendable-output algorithm's digest length in bits from the
/// trailing `_<bits>` suffix of its name ("shake_128" -> 128)
///
/// The suffix convention is validated rather than assumed: the part after
/// the last underscore must parse as a nonzero multiple of 8, otherwise
/// the length cannot be derived and None is returned.
pub fn xof_output_bits(name: &str) -> Option<usize> {
    let (_, suffix) = name.rsplit_once('_')?;
    let bits: usize = suffix.parse().ok()?;
    if bits == 0 || bits % 8 != 0 {
        return None;
    }
    Some(bits)
}
