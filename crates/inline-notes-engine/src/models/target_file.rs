use relative_path::{RelativePath, RelativePathBuf};

/// A file in the vault that a link can point at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetFile {
    relative_path: RelativePathBuf,
    name: String,
}

impl TargetFile {
    /// Create a new TargetFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let name = relative_path.file_name().unwrap_or("Untitled").to_string();
        Self {
            relative_path,
            name,
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name with extension, e.g. `A.md`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The folder holding the file; empty for the vault root.
    pub fn folder(&self) -> &RelativePath {
        self.relative_path.parent().unwrap_or(RelativePath::new(""))
    }
}

impl From<RelativePathBuf> for TargetFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for TargetFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
