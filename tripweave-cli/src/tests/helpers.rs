//! Test helpers for laying out CLI input documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory with a UTF-8 root path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non-UTF-8 tempdir {}", path.display()));
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `value` as JSON under `name` and return its path.
    pub(super) fn json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value)
            .unwrap_or_else(|err| panic!("serialise {name}: {err}"));
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}
