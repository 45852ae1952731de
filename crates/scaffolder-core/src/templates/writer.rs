//! Write a rendered module to disk
//!
//! Files are written into a hidden staging directory next to the final module
//! directory, which is renamed into place once every file is on disk. A failed
//! write leaves no module directory behind.

use crate::error::{Result, ScaffoldError};
use crate::preconditions::{ModulePaths, PROCEDURES_DIR};
use crate::templates::render::RenderedModule;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write every rendered file under `paths.module_dir`
///
/// Returns the paths of the written files, all under the published module
/// directory.
pub async fn write_module(paths: &ModulePaths, module: &RenderedModule) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&paths.modules_dir)
        .await
        .map_err(|e| ScaffoldError::io("create directory", &paths.modules_dir, e))?;

    // Dropping the TempDir removes the staging directory on every early return
    let staging = tempfile::Builder::new()
        .prefix(&staging_prefix(&paths.module_dir))
        .tempdir_in(&paths.modules_dir)
        .map_err(|e| ScaffoldError::io("create staging directory in", &paths.modules_dir, e))?;

    let procedures = staging.path().join(PROCEDURES_DIR);
    fs::create_dir_all(&procedures)
        .await
        .map_err(|e| ScaffoldError::io("create directory", &procedures, e))?;

    // TempDir is created 0700; give the module the permissions of a normal directory
    let perms = fs::metadata(&procedures)
        .await
        .map_err(|e| ScaffoldError::io("read permissions of", &procedures, e))?
        .permissions();
    fs::set_permissions(staging.path(), perms)
        .await
        .map_err(|e| ScaffoldError::io("set permissions on", staging.path(), e))?;

    let mut written = Vec::with_capacity(module.files.len());
    for file in &module.files {
        let staged_path = staging.path().join(file.relative_path);
        if let Some(parent) = staged_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
        }

        fs::write(&staged_path, file.contents.as_bytes())
            .await
            .map_err(|e| ScaffoldError::io("write", &staged_path, e))?;

        written.push(paths.module_dir.join(file.relative_path));
    }

    // Re-check right before publishing: rename would replace an empty directory
    if paths.module_dir.symlink_metadata().is_ok() {
        return Err(ScaffoldError::ModuleExists {
            path: paths.module_dir.clone(),
        });
    }

    fs::rename(staging.path(), &paths.module_dir)
        .await
        .map_err(|e| ScaffoldError::io("move staged module to", &paths.module_dir, e))?;

    // The staging path is now the module directory; stop the guard from deleting it
    let _ = staging.keep();

    Ok(written)
}

fn staging_prefix(module_dir: &Path) -> String {
    let name = module_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(".{}-", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectLayout;
    use crate::naming::ModuleName;
    use crate::templates::render::{render_module, CREATE_PROCEDURE_FILE, ROUTER_FILE, TYPES_FILE};
    use tempfile::tempdir;

    fn setup(root: &Path, raw: &str) -> (ModulePaths, RenderedModule) {
        let name = ModuleName::parse(raw).unwrap();
        std::fs::create_dir_all(root.join("packages/api")).unwrap();
        (
            ModulePaths::new(root, &ProjectLayout::default(), &name),
            render_module(&name),
        )
    }

    #[tokio::test]
    async fn test_writes_all_files() {
        let dir = tempdir().unwrap();
        let (paths, module) = setup(dir.path(), "feedback");

        let written = write_module(&paths, &module).await.unwrap();
        assert_eq!(written.len(), 3);

        for rel in [TYPES_FILE, CREATE_PROCEDURE_FILE, ROUTER_FILE] {
            let on_disk = std::fs::read_to_string(paths.module_dir.join(rel)).unwrap();
            assert_eq!(on_disk, module.get(rel).unwrap().contents);
        }
        assert!(paths.procedures_dir().is_dir());
    }

    #[tokio::test]
    async fn test_no_staging_directory_left_behind() {
        let dir = tempdir().unwrap();
        let (paths, module) = setup(dir.path(), "feedback");

        write_module(&paths, &module).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(&paths.modules_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["feedback".to_string()]);
    }

    #[tokio::test]
    async fn test_refuses_to_replace_existing_module() {
        let dir = tempdir().unwrap();
        let (paths, module) = setup(dir.path(), "feedback");
        std::fs::create_dir_all(&paths.module_dir).unwrap();

        let err = write_module(&paths, &module).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::ModuleExists { .. }));

        // the empty directory is untouched and staging is cleaned up
        assert_eq!(std::fs::read_dir(&paths.module_dir).unwrap().count(), 0);
        assert_eq!(std::fs::read_dir(&paths.modules_dir).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_modules_dir_blocked_by_file() {
        let dir = tempdir().unwrap();
        let (paths, module) = setup(dir.path(), "feedback");
        std::fs::write(&paths.modules_dir, "not a directory").unwrap();

        let err = write_module(&paths, &module).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert!(!paths.module_dir.exists());
    }

    #[tokio::test]
    async fn test_published_module_survives_guard_release() {
        let dir = tempdir().unwrap();
        let (paths, module) = setup(dir.path(), "user-settings");

        let written = write_module(&paths, &module).await.unwrap();

        assert!(written.iter().all(|p| p.starts_with(&paths.module_dir)));
        assert!(written.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_staging_prefix() {
        assert_eq!(
            staging_prefix(Path::new("packages/api/modules/feedback")),
            ".feedback-"
        );
    }
}
