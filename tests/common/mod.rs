// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// One valid line among five; every policy counts exactly 1.
#[allow(dead_code)]
pub const SCENARIO: &str = "alma korte!\nszilva.\ncitrom lime\nAlma Korte!\nrepeat repeat\n";

/// A temp dir holding a single input file; the dir lives as long as the fixture.
pub struct InputFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl InputFixture {
    pub fn new(contents: &str) -> Self {
        Self::named("input.txt", contents)
    }

    #[allow(dead_code)]
    pub fn named(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        Self { dir, path }
    }
}
