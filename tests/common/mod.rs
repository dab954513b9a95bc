#![allow(dead_code)]

use std::fs::{self, File};
use std::path::PathBuf;

pub const KEY_NOT_FOUND: &str = "NOT_FOUND_KEY";

pub fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests");
    p.push("fixtures");
    p.push("words");
    p.push(name);
    p
}

pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

pub fn open_fixture(name: &str) -> File {
    let path = fixture_path(name);
    File::open(&path).unwrap_or_else(|e| panic!("failed to open {}: {}", path.display(), e))
}
