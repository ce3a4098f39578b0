/// A scanned filesystem entry and, for directories, its listed children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileNode {
    pub name: String,
    /// Path relative to the scan root, always `/`-separated.
    pub path: String,
    pub is_directory: bool,
    /// Empty for files and for directories at the depth limit.
    pub children: Vec<FileNode>,
    /// Depth from the scan root; root's own entries are level 0.
    pub level: usize,
}
