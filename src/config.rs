//! Process-wide configuration, resolved once at startup.

use std::path::{Path, PathBuf};

/// Environment variable selecting the Vagrant project directory.
pub const PROJECTS_DIR_ENV: &str = "VAGRANT_PROJECTS_DIR";
pub const DEFAULT_PROJECTS_DIR: &str = "/vagrant-projects";

/// Environment variable overriding the `vagrant` executable.
pub const VAGRANT_BIN_ENV: &str = "VAGRANT_BIN";
pub const DEFAULT_VAGRANT_BIN: &str = "vagrant";

/// Immutable after construction. Every request runs in `projects_dir`; a
/// caller-supplied `directory` argument never replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    projects_dir: PathBuf,
    vagrant_bin: String,
}

impl Config {
    pub fn new(projects_dir: impl Into<PathBuf>, vagrant_bin: impl Into<String>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
            vagrant_bin: vagrant_bin.into(),
        }
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn vagrant_bin(&self) -> &str {
        &self.vagrant_bin
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECTS_DIR, DEFAULT_VAGRANT_BIN)
    }
}
