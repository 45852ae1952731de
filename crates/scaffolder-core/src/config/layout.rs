//! Where modules live inside the monorepo
//!
//! Defaults follow the supastarter layout. A project can override them with a
//! `.module-scaffold.yaml` file at its root, and the API package location can
//! be overridden with the `MODULE_SCAFFOLD_API_ROOT` environment variable.

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional layout file, looked up in the project root
pub const LAYOUT_FILE: &str = ".module-scaffold.yaml";

/// Environment variable overriding `api_root`
pub const API_ROOT_ENV: &str = "MODULE_SCAFFOLD_API_ROOT";

/// Project-relative paths used when scaffolding a module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectLayout {
    /// API package directory, relative to the project root
    pub api_root: PathBuf,

    /// Directory holding modules, relative to `api_root`
    pub modules_dir: PathBuf,

    /// Aggregate router the new module must be mounted in, relative to `api_root`
    pub aggregate_router: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            api_root: PathBuf::from("packages/api"),
            modules_dir: PathBuf::from("modules"),
            aggregate_router: PathBuf::from("orpc/router.ts"),
        }
    }
}

impl ProjectLayout {
    /// Resolve the layout for a project root: defaults, then the layout file,
    /// then the environment override
    pub fn resolve(root: &Path) -> Result<Self> {
        let layout = Self::load(root)?;
        Ok(layout.with_api_root_override(std::env::var(API_ROOT_ENV).ok()))
    }

    /// Read the layout file from `root`, falling back to defaults when absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(LAYOUT_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ScaffoldError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content).map_err(|message| ScaffoldError::Config { path, message })
    }

    fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Replace `api_root` when an override is set and non-blank
    pub fn with_api_root_override(mut self, api_root: Option<String>) -> Self {
        if let Some(value) = api_root.filter(|v| !v.trim().is_empty()) {
            self.api_root = PathBuf::from(value.trim());
        }
        self
    }

    /// API package directory under `root`
    ///
    /// A root of `.` is dropped so paths read `packages/api/...` in output.
    pub fn api_dir(&self, root: &Path) -> PathBuf {
        if root == Path::new(".") {
            self.api_root.clone()
        } else {
            root.join(&self.api_root)
        }
    }

    /// Directory that contains every module
    pub fn modules_path(&self, root: &Path) -> PathBuf {
        self.api_dir(root).join(&self.modules_dir)
    }

    /// Aggregate router path as shown to the user, relative to the project root
    pub fn aggregate_router_display(&self) -> String {
        self.api_root
            .join(&self.aggregate_router)
            .display()
            .to_string()
    }

    /// Import specifier for a module's router, as seen from the aggregate router
    pub fn router_import_path(&self, module: &str) -> String {
        let depth = self
            .aggregate_router
            .parent()
            .map(|p| p.components().count())
            .unwrap_or(0);
        let up = if depth == 0 {
            "./".to_string()
        } else {
            "../".repeat(depth)
        };
        let modules = self.modules_dir.display().to_string().replace('\\', "/");
        format!("{}{}/{}/router", up, modules, module)
    }
}

/// Serializes tests that read or write process environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
