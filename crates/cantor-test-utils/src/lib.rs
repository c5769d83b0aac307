//! Test utilities for Cantor crates.

use std::path::PathBuf;

use cantor_core::UrlIndex;
use tempfile::TempDir;

/// A hymn list covering hymns, psalms, repeated parts and anthems.
pub const SAMPLE_HYMNS: &str = r#"hymns:
  a:
    opening:
      list:
        - name: all creatures of our god and king
          tune: lasst uns erfreuen
          book: Worship IV
          priority: preferred
        - name: praise to the lord, the almighty
          tune: lobe den herren
          verses: 1, 3-4
          book: Gather
          priority: optional
    psalm:
      list:
        - name: Psalm 23 The Lord Is My Shepherd
          composer: joseph gelineau
          tune: Gelineau
          priority: required
    communion:
      list:
        - name: taste and see
          composer: james moore
          book: "[OCP](https://www.ocp.org)"
          note: during Communion
          priority: flexible
  abc:
    anthems:
      list:
        - name: ave verum corpus
          composer: w. a. mozart
        - name: o sacrum convivium
          composer: thomas tallis
"#;

/// A Mass setting with options, years and tunes.
pub const SAMPLE_MASS: &str = r#"mass:
  abc:
    kyrie:
      list:
        - name: kyrie
          option: Form A
          composer: missa de angelis
          priority: required
    holy-holy-holy:
      list:
        - name: holy, holy, holy
          composer: richard proulx
          year: A
          priority: preferred
    lamb-of-god:
      list:
        - name: lamb of god
          tune: agnus dei xviii
          note: During the fraction rite
          priority: none
"#;

/// URL index matching some of the sample entries.
pub fn sample_urls() -> UrlIndex {
    [
        (
            "all-creatures-of-our-god-and-king-lasst-uns-erfreuen",
            "https://example.com/watch/all-creatures",
        ),
        ("ave-verum-corpus-w-a-mozart", "https://example.com/watch/ave-verum"),
        ("kyrie-missa-de-angelis", "https://example.com/watch/kyrie"),
    ]
    .into_iter()
    .collect()
}

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Creates a temporary file with given content.
pub fn temp_file(content: &str) -> (TempDir, PathBuf) {
    temp_file_named("test_file", content)
}

/// Creates a temporary file with a specific name and content.
pub fn temp_file_named(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
