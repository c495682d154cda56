//! Shared mock backend for CLI unit tests.

use std::collections::HashMap;

use crate::SalmapBackend;

pub struct MockSalmapBackend {
    files: HashMap<String, String>,
    stdin: String,
}

impl MockSalmapBackend {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            stdin: String::new(),
        }
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn with_stdin(mut self, contents: &str) -> Self {
        self.stdin = contents.to_string();
        self
    }
}

impl SalmapBackend for MockSalmapBackend {
    fn read_file(&self, path: &str) -> Result<String, String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("read {path}: no such file"))
    }

    fn read_stdin(&self) -> Result<String, String> {
        Ok(self.stdin.clone())
    }
}
