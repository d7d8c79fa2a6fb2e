//! Project context resolution
//!
//! Everything onc knows about a project is derived fresh from the working
//! directory on each invocation; nothing is persisted. The container name
//! follows the `<project>-pb` convention but can be pinned explicitly
//! (`--container-name` / `ONC_CONTAINER_NAME`), which bypasses the
//! directory lookup.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{OncError, Result};

/// Suffix appended to the project name to form the container name
pub const CONTAINER_SUFFIX: &str = "-pb";

/// Port the PocketBase container binds on the host
pub const BACKEND_PORT: u16 = 8090;

/// Default port for the Astro dev server (3000 in the earlier convention)
pub const FRONTEND_PORT: u16 = 4321;

/// Path of the PocketBase app inside a scaffolded project
pub const PB_DIR: &str = "apps/pb";

/// Facts about the current project, derived from the working directory
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root (the directory onc was invoked from)
    pub root: PathBuf,
    /// Name of the project, i.e. the root directory's file name
    pub project_name: String,
    /// Name of the backend container (and its image)
    pub container_name: String,
    /// Port the Astro dev server is expected on
    pub frontend_port: u16,
}

impl ProjectContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir()?;
        Self::from_dir(&cwd)
    }

    /// Resolve the context from an explicit directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let project_name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                OncError::ExecutionError(format!(
                    "Cannot derive a project name from '{}'",
                    dir.display()
                ))
            })?;

        let container_name = format!("{}{}", project_name, CONTAINER_SUFFIX);

        Ok(Self {
            root: dir.to_path_buf(),
            project_name,
            container_name,
            frontend_port: FRONTEND_PORT,
        })
    }

    /// Resolve the context with a fixed container name instead of the
    /// directory-derived one.
    pub fn with_container_name(dir: &Path, name: &str) -> Result<Self> {
        let mut ctx = Self::from_dir(dir)?;
        ctx.container_name = name.to_string();
        Ok(ctx)
    }

    /// Directory holding the PocketBase app (Dockerfile, pb_data, ...)
    pub fn pb_dir(&self) -> PathBuf {
        self.root.join(PB_DIR)
    }

    /// The PocketBase data directory
    pub fn pb_data_dir(&self) -> PathBuf {
        self.pb_dir().join("pb_data")
    }

    /// Base URL of the locally served backend
    pub fn backend_url(&self) -> String {
        format!("http://localhost:{}", BACKEND_PORT)
    }

    /// URL of the backend admin UI
    pub fn admin_url(&self) -> String {
        format!("http://localhost:{}/_/", BACKEND_PORT)
    }

    /// URL of the frontend dev server
    pub fn frontend_url(&self) -> String {
        format!("http://localhost:{}", self.frontend_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_name_follows_convention() {
        let ctx = ProjectContext::from_dir(Path::new("/tmp/demo")).unwrap();
        assert_eq!(ctx.project_name, "demo");
        assert_eq!(ctx.container_name, "demo-pb");
    }

    #[test]
    fn test_container_name_is_deterministic() {
        let a = ProjectContext::from_dir(Path::new("/home/me/blog")).unwrap();
        let b = ProjectContext::from_dir(Path::new("/var/other/blog")).unwrap();
        assert_eq!(a.container_name, b.container_name);
    }

    #[test]
    fn test_explicit_name_overrides_convention() {
        let ctx = ProjectContext::with_container_name(Path::new("/tmp/demo"), "fixed").unwrap();
        assert_eq!(ctx.container_name, "fixed");
        assert_eq!(ctx.project_name, "demo");
    }

    #[test]
    fn test_root_resolution_fails() {
        assert!(ProjectContext::from_dir(Path::new("/")).is_err());
    }

    #[test]
    fn test_urls() {
        let ctx = ProjectContext::from_dir(Path::new("/tmp/demo")).unwrap();
        assert_eq!(ctx.backend_url(), "http://localhost:8090");
        assert_eq!(ctx.admin_url(), "http://localhost:8090/_/");
        assert_eq!(ctx.frontend_url(), "http://localhost:4321");
    }

    #[test]
    fn test_frontend_port_is_adjustable() {
        let mut ctx = ProjectContext::from_dir(Path::new("/tmp/demo")).unwrap();
        ctx.frontend_port = 3000;
        assert_eq!(ctx.frontend_url(), "http://localhost:3000");
    }
}
