use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Destination directory for the new project, resolved from the validated
/// project name relative to the current directory.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl ProjectDir {
    pub fn new(name: &str) -> Self {
        Self(PathBuf::from(name))
    }

    /// Rendering for the final `cd` hint, quoted when the path holds a space.
    pub fn display_quoted(&self) -> String {
        let path = self.0.display().to_string();
        if path.contains(' ') {
            format!("\"{path}\"")
        } else {
            path
        }
    }
}

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}
