pub mod args;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod tool;

use std::path::{Component, Path, PathBuf};

use crate::core::walk::scan_tree;
use crate::core::{IgnoreSet, ScanOptions, render_tree};
use crate::error::TreeError;
use crate::fs::FileSystem;

/// One tree generation call.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TreeRequest {
    /// Target path as given by the caller
    pub target: String,
    /// Directory a relative `target` is resolved against instead of the working directory
    pub base_override: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub show_hidden: bool,
}

/// Render the filtered tree for `request`.
///
/// Fails only when the target is missing or not a directory. No directory is
/// listed in that case.
pub async fn generate_tree<F: FileSystem>(
    fs: &F,
    request: &TreeRequest,
) -> Result<String, TreeError> {
    let root = resolve_target(&request.target, request.base_override.as_deref())?;

    let ignore = IgnoreSet::build(fs, &root).await;
    let options = ScanOptions {
        max_depth: request.max_depth,
        show_hidden: request.show_hidden,
        ..ScanOptions::new(root.clone())
    };
    log::debug!("scanning {} with {options:?}", root.display());

    let nodes = scan_tree(fs, &request.target, &options, &ignore).await?;
    Ok(render_tree(&root_display_name(&root), &nodes))
}

/// Absolute path for `target` with `.` and `..` components folded away.
///
/// Absolute targets are kept as is. Relative ones are joined to `base_override`
/// when given, otherwise to the working directory. A `..` at the root stays at
/// the root.
pub fn resolve_target(target: &str, base_override: Option<&Path>) -> Result<PathBuf, TreeError> {
    let target_path = Path::new(if target.is_empty() { "." } else { target });
    let joined = match base_override {
        Some(base) if !target_path.is_absolute() => base.join(target_path),
        _ => target_path.to_path_buf(),
    };

    let absolute = std::path::absolute(&joined).map_err(|source| TreeError::Resolve {
        path: target.to_owned(),
        source,
    })?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

pub fn root_display_name(root_path: &Path) -> String {
    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}
