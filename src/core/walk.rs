use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::core::ignore::IgnoreSet;
use crate::error::TreeError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FileNode, FsEntry};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScanOptions {
    /// Maximum depth to traverse (None means unlimited)
    pub max_depth: Option<usize>,
    /// Whether to show hidden files (starting with '.')
    pub show_hidden: bool,
    /// Absolute scan root; relative paths and `.gitignore` lookup use it
    pub base_directory: PathBuf,
}

impl ScanOptions {
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            max_depth: None,
            show_hidden: false,
            base_directory: base_directory.into(),
        }
    }
}

/// Verify that `root` exists and is a directory.
///
/// `target` is the path as the caller spelled it and is used in the error.
pub async fn check_root<F: FileSystem>(fs: &F, root: &Path, target: &str) -> Result<(), TreeError> {
    match fs.entry_kind(root).await {
        Ok(EntryKind::Directory) => Ok(()),
        Ok(_) => Err(TreeError::NotADirectory(target.to_owned())),
        Err(err) => {
            log::debug!("cannot stat {}: {err:#}", root.display());
            Err(TreeError::NotFound(target.to_owned()))
        }
    }
}

/// Check the scan root, then list it from level 0.
///
/// The root is `options.base_directory`; `target` is the caller's spelling of
/// it for error messages.
pub async fn scan_tree<F: FileSystem>(
    fs: &F,
    target: &str,
    options: &ScanOptions,
    ignore: &IgnoreSet,
) -> Result<Vec<FileNode>, TreeError> {
    let root = &options.base_directory;
    check_root(fs, root, target).await?;
    Ok(scan_dir(fs, root, options, ignore, 0).await)
}

/// List `dir` at `current_level`, recursing into kept subdirectories.
///
/// A directory that cannot be read contributes no children. The error is
/// logged and traversal continues with its siblings.
pub async fn scan_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &ScanOptions,
    ignore: &IgnoreSet,
    current_level: usize,
) -> Vec<FileNode> {
    if options.max_depth.is_some_and(|max| current_level >= max) {
        return Vec::new();
    }

    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("listing {} as empty: {err:#}", dir.display());
            return Vec::new();
        }
    };

    let mut kept: Vec<(String, FsEntry)> = entries
        .into_iter()
        .filter_map(|entry| {
            if !options.show_hidden && entry.name.starts_with('.') {
                return None;
            }

            let relative = relative_path(&options.base_directory, &entry.path);
            // Directories carry a trailing slash so `dir/` patterns hit the directory itself.
            let candidate = if entry.kind == EntryKind::Directory {
                format!("{relative}/")
            } else {
                relative.clone()
            };
            if ignore.matches(&candidate) {
                log::debug!("ignoring {candidate}");
                return None;
            }

            Some((relative, entry))
        })
        .collect();

    kept.sort_by(|(_, a), (_, b)| compare_entries(a, b));

    let mut nodes = Vec::with_capacity(kept.len());
    for (relative, entry) in kept {
        let is_directory = entry.kind == EntryKind::Directory;

        // Symlinks are leaves and never followed
        let children = if is_directory {
            Box::pin(scan_dir(fs, &entry.path, options, ignore, current_level + 1)).await
        } else {
            Vec::new()
        };

        nodes.push(FileNode {
            name: entry.name,
            path: relative,
            is_directory,
            children,
            level: current_level,
        });
    }

    nodes
}

fn relative_path(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directories first, then names in reading order.
fn compare_entries(a: &FsEntry, b: &FsEntry) -> Ordering {
    let a_dir = a.kind == EntryKind::Directory;
    let b_dir = b.kind == EntryKind::Directory;
    b_dir
        .cmp(&a_dir)
        .then_with(|| reading_order(&a.name, &b.name))
}

/// Case-insensitive comparison; names differing only by case put lowercase first.
pub fn reading_order(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}
