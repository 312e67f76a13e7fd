// Tests for algorithm token resolution

use polyhash::catalog;
use polyhash::error::HashError;
use polyhash::resolver::{self, DEFAULT_ALGORITHMS};

#[test]
fn test_empty_tokens_fall_back_to_defaults() {
    let resolved = resolver::resolve(&[]).unwrap();
    assert_eq!(resolved, vec!["md5", "sha1", "sha256"]);
    assert_eq!(DEFAULT_ALGORITHMS, ["md5", "sha1", "sha256"]);
}

#[test]
fn test_all_token_yields_whole_catalog() {
    let tokens = vec!["all".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();

    let expected: Vec<&str> = catalog::algorithms().iter().map(|info| info.name).collect();
    assert_eq!(resolved, expected);
    assert_eq!(resolved.len(), 14);
}

#[test]
fn test_all_token_overrides_other_tokens() {
    // "all" wins over everything else in the list, valid or not
    let tokens = vec!["md5".to_string(), "all".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved.len(), 14);

    let tokens = vec!["notarealalg".to_string(), "all".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved.len(), 14);
}

#[test]
fn test_sha3_group_expansion() {
    let tokens = vec!["sha3".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["sha3_224", "sha3_256", "sha3_384", "sha3_512"]);
}

#[test]
fn test_sha_group_expansion() {
    let tokens = vec!["sha".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["sha1", "sha224", "sha256", "sha384", "sha512"]);
}

#[test]
fn test_blake_and_shake_group_expansion() {
    let tokens = vec!["blake".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["blake2b", "blake2s"]);

    let tokens = vec!["shake".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["shake_128", "shake_256"]);
}

#[test]
fn test_groups_expand_in_place() {
    let tokens = vec!["md5".to_string(), "shake".to_string(), "sha1".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["md5", "shake_128", "shake_256", "sha1"]);
}

#[test]
fn test_literal_and_group_deduplicate() {
    // The explicit literal keeps its position; the group fills in the rest
    let tokens = vec!["sha3_256".to_string(), "sha3".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["sha3_256", "sha3_224", "sha3_384", "sha3_512"]);
}

#[test]
fn test_repeated_literals_deduplicate() {
    let tokens = vec!["md5".to_string(), "md5".to_string(), "sha1".to_string()];
    let resolved = resolver::resolve(&tokens).unwrap();
    assert_eq!(resolved, vec!["md5", "sha1"]);
}

#[test]
fn test_unsupported_token_fails_naming_it() {
    let tokens = vec!["notarealalg".to_string()];
    let result = resolver::resolve(&tokens);

    assert!(result.is_err());
    match result {
        Err(HashError::UnsupportedAlgorithm { algorithm }) => {
            assert_eq!(algorithm, "notarealalg");
        }
        _ => panic!("Expected UnsupportedAlgorithm error"),
    }
}

#[test]
fn test_first_invalid_token_wins() {
    let tokens = vec![
        "sha256".to_string(),
        "bogus1".to_string(),
        "bogus2".to_string(),
    ];
    match resolver::resolve(&tokens) {
        Err(HashError::UnsupportedAlgorithm { algorithm }) => {
            assert_eq!(algorithm, "bogus1");
        }
        _ => panic!("Expected UnsupportedAlgorithm error"),
    }
}

#[test]
fn test_tokens_are_case_sensitive() {
    let tokens = vec!["MD5".to_string()];
    match resolver::resolve(&tokens) {
        Err(HashError::UnsupportedAlgorithm { algorithm }) => {
            assert_eq!(algorithm, "MD5");
        }
        _ => panic!("Expected UnsupportedAlgorithm error"),
    }
}
