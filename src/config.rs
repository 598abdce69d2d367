// src/config.rs
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Template directory, relative to the project root (the parent of the
/// directory holding the binary).
pub const TEMPLATE_SUBDIR: &str = "ucode/template/themes/orion";

/// Extension (without the dot) of the files that get scanned.
pub const TEMPLATE_EXTENSION: &str = "ut";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub template_dir: PathBuf,
    pub extension: String,
    pub verbose: bool,
}

impl ScanConfig {
    #[must_use]
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            extension: TEMPLATE_EXTENSION.to_string(),
            verbose: false,
        }
    }

    /// Resolves the template directory next to the running executable.
    ///
    /// # Errors
    /// Returns error if the executable path cannot be determined.
    pub fn from_install_dir() -> Result<Self> {
        let exe = env::current_exe()?;
        let exe = fs::canonicalize(&exe).unwrap_or(exe);
        let install_dir = exe.parent().unwrap_or(Path::new("."));
        Ok(Self::new(template_dir_for(install_dir)))
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Maps an install directory to `<install_dir>/../ucode/template/themes/orion`.
#[must_use]
pub fn template_dir_for(install_dir: &Path) -> PathBuf {
    match install_dir.parent() {
        Some(project_dir) => project_dir.join(TEMPLATE_SUBDIR),
        None => install_dir.join("..").join(TEMPLATE_SUBDIR),
    }
}
