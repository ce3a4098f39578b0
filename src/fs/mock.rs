use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    dirs: HashMap<PathBuf, Response>,
    files: HashMap<PathBuf, String>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(path.into(), contents.into());
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

pub fn dir_entry(path: &str, name: &str) -> FsEntry {
    FsEntry {
        path: PathBuf::from(path),
        name: name.to_owned(),
        kind: EntryKind::Directory,
    }
}

pub fn file_entry(path: &str, name: &str) -> FsEntry {
    FsEntry {
        path: PathBuf::from(path),
        name: name.to_owned(),
        kind: EntryKind::File,
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.dirs.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let inner = self.inner.lock().expect("mock fs lock");
        if inner.dirs.contains_key(path) {
            Ok(EntryKind::Directory)
        } else if inner.files.contains_key(path) {
            Ok(EntryKind::File)
        } else {
            Err(anyhow!("No such file or directory: {}", path.display()))
        }
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("No such file or directory: {}", path.display()))
    }
}
