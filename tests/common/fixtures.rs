//! Static user documents used across harnesses.
//!
//! Each fixture is the text of a `users.json` file. [`write_fixture`] puts one
//! on disk in a fresh temp directory for harnesses that exercise the loader.

use std::path::PathBuf;

/// The two-record document from the end-to-end examples.
pub const USERS_BOB_ANN: &str = r#"[
  {"name": "Bob", "age": 25, "email": "bob@x.com"},
  {"name": "Ann", "age": 30, "email": "ann@x.com"}
]"#;

/// A document with every awkward shape the loader has to tolerate.
pub const USERS_MIXED: &str = r#"[
  {"name": "Alice", "age": 34, "email": "Alice@Example.com", "role": "admin"},
  {"name": "  bob  ", "age": 21, "email": "bob@example.com"},
  {"name": "Carol", "age": "29", "email": "carol@notexample.com"},
  {"name": "Dave", "age": null, "email": "dave@sub.example.com"},
  {"name": "Erin", "email": ""},
  {"age": 29.0, "email": "ghost@x.org"},
  {"name": "Frank", "age": 29}
]"#;

/// Valid JSON that is not an array of objects.
pub const USERS_NOT_ARRAY: &str = r#"{"name": "Bob", "age": 25}"#;

/// Not JSON at all.
pub const USERS_TRUNCATED: &str = r#"[{"name": "Bob", "age": 2"#;

/// A fixture written to disk. The directory is removed on drop.
pub struct FixtureFile {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

/// Write `contents` to `<tempdir>/users.json`.
pub fn write_fixture(contents: &str) -> FixtureFile {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("users.json");
    std::fs::write(&path, contents).expect("write fixture");
    FixtureFile { dir, path }
}
