//! The scaffold pipeline: normalize, check, render, write

use crate::config::ProjectLayout;
use crate::error::Result;
use crate::naming::ModuleName;
use crate::preconditions::{check_preconditions, ModulePaths};
use crate::templates::{render_module, write_module, RenderedModule};
use std::path::PathBuf;

/// One scaffold request
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Module name as typed by the user
    pub raw_name: String,

    /// Monorepo root
    pub root: PathBuf,

    /// Layout to scaffold into; resolved from `root` when `None`
    pub layout: Option<ProjectLayout>,

    /// Check and render, but write nothing
    pub dry_run: bool,
}

impl ScaffoldRequest {
    pub fn new(raw_name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            raw_name: raw_name.into(),
            root: root.into(),
            layout: None,
            dry_run: false,
        }
    }
}

/// Result of a successful scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub name: ModuleName,
    pub layout: ProjectLayout,
    pub paths: ModulePaths,
    pub module: RenderedModule,
    /// Files written to disk; empty for a dry run
    pub written: Vec<PathBuf>,
}

/// Scaffold a module, stopping at the first failing step
///
/// The name is validated before the filesystem is consulted, and both
/// preconditions are checked before anything is created.
pub async fn scaffold_module(request: &ScaffoldRequest) -> Result<ScaffoldOutcome> {
    let name = ModuleName::parse(&request.raw_name)?;

    let layout = match &request.layout {
        Some(layout) => layout.clone(),
        None => ProjectLayout::resolve(&request.root)?,
    };

    let paths = check_preconditions(&request.root, &layout, &name)?;
    let module = render_module(&name);

    let written = if request.dry_run {
        Vec::new()
    } else {
        write_module(&paths, &module).await?
    };

    Ok(ScaffoldOutcome {
        name,
        layout,
        paths,
        module,
        written,
    })
}
