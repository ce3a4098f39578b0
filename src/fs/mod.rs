mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, dir_entry, file_entry};

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Kind of the entry at `path`, following symlinks.
    async fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    async fn read_to_string(&self, path: &Path) -> Result<String>;
}
