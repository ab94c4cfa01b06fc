//! Shared fixtures for import tests.
//!
//! Files are written into a `TempDir` that lives as long as the returned
//! `Fixtures` value.

use morning_greetings::RawMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct Fixtures {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `content` to `name` inside the fixture directory.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// A keyed in-memory record.
#[allow(dead_code)]
pub fn raw_map(name: &str, email: &str, preferred_time: &str) -> RawMap {
    [
        ("name", name),
        ("email", email),
        ("preferred_time", preferred_time),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
