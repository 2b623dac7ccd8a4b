//! File system writes.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let file = nested.join("index.html");

        let runtime = RealRuntime;
        runtime.create_dir_all(&nested).unwrap();
        runtime.write(&file, b"<html></html>").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "<html></html>");
    }

    #[test]
    fn test_real_runtime_write_missing_parent_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing").join("index.html");

        let err = RealRuntime.write(&file, b"x").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
    }
}
