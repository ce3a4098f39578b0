use std::path::Path;

use crate::fs::FileSystem;

/// Patterns excluded from every scan, matched as path segments.
pub const DEFAULT_IGNORES: &[&str] = &[".git", ".DS_Store", "node_modules"];

/// Ordered exclusion patterns: the defaults followed by the root `.gitignore`.
///
/// This is a small subset of gitignore. There is no negation, no `**` outside
/// a trailing `/**`, and no anchoring to the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl IgnoreSet {
    /// Build from the defaults plus `<base_dir>/.gitignore`, if readable.
    pub async fn build<F: FileSystem>(fs: &F, base_dir: &Path) -> Self {
        let gitignore = base_dir.join(".gitignore");
        let extra = match fs.read_to_string(&gitignore).await {
            Ok(contents) => parse_gitignore(&contents),
            Err(err) => {
                log::debug!("no patterns from {}: {err}", gitignore.display());
                Vec::new()
            }
        };

        Self::from_patterns(extra)
    }

    /// Defaults followed by `extra`, in order.
    pub fn from_patterns<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = DEFAULT_IGNORES
            .iter()
            .map(|p| (*p).to_owned())
            .chain(extra.into_iter().map(Into::into))
            .collect();
        Self { patterns }
    }

    #[cfg(test)]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether any pattern excludes `relative_path` (`/`-separated).
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, relative_path))
    }
}

fn parse_gitignore(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    if let Some(prefix) = pattern.strip_suffix("/**") {
        return path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'));
    }

    if pattern.contains('/') {
        return path.contains(pattern);
    }

    path.split('/').any(|segment| segment == pattern)
}
