//! `onc new` - scaffold a project

use std::fs;
use std::path::Path;

use crate::error::{OncError, Result};
use crate::output;
use crate::project::ProjectContext;
use crate::registry;
use crate::templates;

pub fn execute(name: &str) -> Result<i32> {
    let root = Path::new(name);
    if root.exists() {
        return Err(OncError::ProjectExists(name.to_string()));
    }
    let ctx = ProjectContext::from_dir(root)?;

    println!("Creating directories...");
    let pb_dir = ctx.pb_dir();
    fs::create_dir_all(pb_dir.join("pb_migrations"))?;
    fs::create_dir_all(pb_dir.join("pb_hooks"))?;
    fs::create_dir_all(pb_dir.join("pb_data"))?;
    fs::create_dir_all(root.join("apps/web"))?;
    fs::create_dir_all(root.join(".github/workflows"))?;

    fs::write(pb_dir.join("pb_migrations/.gitkeep"), "")?;
    fs::write(pb_dir.join("pb_hooks/.gitkeep"), "")?;

    println!("Fetching latest PocketBase version...");
    let pb_version = registry::latest_pocketbase_version();

    println!("Generating configuration files...");
    fs::write(
        pb_dir.join("package.json"),
        templates::package_json(&ctx.project_name),
    )?;
    fs::write(pb_dir.join("Dockerfile"), templates::dockerfile(&pb_version))?;
    fs::write(pb_dir.join("fly.toml"), templates::fly_toml(&ctx.project_name))?;
    fs::write(root.join(".gitignore"), templates::gitignore())?;
    fs::write(root.join(".env.local"), templates::env_local())?;
    fs::write(root.join(".env.example"), templates::env_example())?;
    fs::write(root.join("README.md"), templates::readme(&ctx.project_name))?;

    output::success(&format!(
        "Project {} created successfully (PocketBase {})",
        ctx.project_name, pb_version
    ));

    println!("\nNext steps:");
    output::command_hint(&format!("cd {}", name));
    output::command_hint("onc pb setup");
    output::command_hint("onc pb start");
    output::backend_endpoints(&ctx);

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scaffold_layout() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("demo");
        let name = root.to_str().unwrap();

        assert_eq!(execute(name).unwrap(), 0);

        for path in [
            "apps/pb/pb_migrations/.gitkeep",
            "apps/pb/pb_hooks/.gitkeep",
            "apps/pb/pb_data",
            "apps/pb/package.json",
            "apps/pb/Dockerfile",
            "apps/pb/fly.toml",
            "apps/web",
            ".github/workflows",
            ".gitignore",
            ".env.local",
            ".env.example",
            "README.md",
        ] {
            assert!(root.join(path).exists(), "missing {}", path);
        }
    }

    #[test]
    fn test_existing_directory_is_refused() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("demo");
        fs::create_dir_all(&root).unwrap();

        match execute(root.to_str().unwrap()) {
            Err(OncError::ProjectExists(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_dockerfile_contains_some_version() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("demo");
        execute(root.to_str().unwrap()).unwrap();

        let dockerfile = fs::read_to_string(root.join("apps/pb/Dockerfile")).unwrap();
        assert!(dockerfile.contains("ARG PB_VERSION="));
    }
}
