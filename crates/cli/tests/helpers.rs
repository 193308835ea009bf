use std::path::PathBuf;

use modeldb::{absolutize, short_checksum};
use tempfile::tempdir;

#[test]
fn absolutize_canonicalizes_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("db.yaml");
    std::fs::write(&file, "name: x\nversion: 1\n").expect("write");

    let resolved = absolutize(file.to_str().unwrap()).expect("absolutize");
    assert_eq!(resolved, file.canonicalize().unwrap());
}

#[test]
fn absolutize_keeps_missing_absolute_path() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("nope.json");

    let resolved = absolutize(missing.to_str().unwrap()).expect("absolutize");
    assert_eq!(resolved, missing);
}

#[test]
fn absolutize_joins_missing_relative_path_onto_cwd() {
    let resolved = absolutize("does/not/exist.yaml").expect("absolutize");
    let expected: PathBuf = std::env::current_dir().unwrap().join("does/not/exist.yaml");
    assert_eq!(resolved, expected);
}

#[test]
fn short_checksum_truncates_long_values_only() {
    assert_eq!(short_checksum("0123456789abcdef"), "0123456789ab");
    assert_eq!(short_checksum("abc"), "abc");
}
