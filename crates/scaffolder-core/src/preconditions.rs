//! Filesystem checks performed before anything is written

use crate::config::ProjectLayout;
use crate::error::{Result, ScaffoldError};
use crate::naming::ModuleName;
use std::path::{Path, PathBuf};

/// Name of the subdirectory holding procedure files
pub const PROCEDURES_DIR: &str = "procedures";

/// Resolved locations for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePaths {
    /// API package directory (must already exist)
    pub api_dir: PathBuf,
    /// Directory holding every module (created if missing)
    pub modules_dir: PathBuf,
    /// The new module's directory (must not exist)
    pub module_dir: PathBuf,
}

impl ModulePaths {
    pub fn new(root: &Path, layout: &ProjectLayout, name: &ModuleName) -> Self {
        let modules_dir = layout.modules_path(root);
        Self {
            api_dir: layout.api_dir(root),
            module_dir: modules_dir.join(name.as_str()),
            modules_dir,
        }
    }

    pub fn procedures_dir(&self) -> PathBuf {
        self.module_dir.join(PROCEDURES_DIR)
    }
}

/// Fail unless the API package directory exists
pub fn check_api_root(paths: &ModulePaths) -> Result<()> {
    if !paths.api_dir.is_dir() {
        return Err(ScaffoldError::MissingApiRoot {
            path: paths.api_dir.clone(),
        });
    }
    Ok(())
}

/// Fail if anything already occupies the module directory path
pub fn check_module_absent(paths: &ModulePaths) -> Result<()> {
    // symlink_metadata so a dangling symlink still counts as occupied
    if paths.module_dir.symlink_metadata().is_ok() {
        return Err(ScaffoldError::ModuleExists {
            path: paths.module_dir.clone(),
        });
    }
    Ok(())
}

/// Run every precondition in order and return the resolved paths
pub fn check_preconditions(
    root: &Path,
    layout: &ProjectLayout,
    name: &ModuleName,
) -> Result<ModulePaths> {
    let paths = ModulePaths::new(root, layout, name);
    check_api_root(&paths)?;
    check_module_absent(&paths)?;
    Ok(paths)
}
