//! File templates written by `onc new`
//!
//! Templates interpolate only the project name and the PocketBase version;
//! everything else is fixed. The npm scripts in the generated package.json
//! mirror the docker commands onc itself issues, so projects stay usable
//! without onc installed.

use serde_json::json;

use crate::project::{BACKEND_PORT, CONTAINER_SUFFIX};

/// PocketBase version used when the release lookup fails
pub const FALLBACK_PB_VERSION: &str = "0.22.25";

/// Dockerfile for the PocketBase app.
pub fn dockerfile(pb_version: &str) -> String {
    format!(
        r#"FROM alpine:latest

ARG PB_VERSION={pb_version}

RUN apk add --no-cache unzip ca-certificates

ADD https://github.com/pocketbase/pocketbase/releases/download/v${{PB_VERSION}}/pocketbase_${{PB_VERSION}}_linux_amd64.zip /tmp/pb.zip
RUN unzip /tmp/pb.zip -d /pb/

COPY ./pb_migrations /pb/pb_migrations
COPY ./pb_hooks /pb/pb_hooks

EXPOSE {port}

CMD ["/pb/pocketbase", "serve", "--http=0.0.0.0:{port}"]
"#,
        pb_version = pb_version,
        port = BACKEND_PORT,
    )
}

/// package.json for the PocketBase app, with docker:* and db:* scripts.
pub fn package_json(project: &str) -> String {
    let container = format!("{}{}", project, CONTAINER_SUFFIX);
    let pkg = json!({
        "name": project,
        "private": true,
        "version": "0.0.1",
        "description": "PocketBase deployment with Docker and fly.io",
        "scripts": {
            "dev": "npm run docker:start || npm run docker:run",
            "predev": "npm run docker:stop || true",
            "docker:build": format!("docker build -t {} .", container),
            "docker:run": format!(
                "docker run --name {c} -d -p {p}:{p} -v ./pb_data:/pb/pb_data -v ./pb_migrations:/pb/pb_migrations -v ./pb_hooks:/pb/pb_hooks {c}",
                c = container, p = BACKEND_PORT
            ),
            "docker:start": format!("docker start {}", container),
            "docker:stop": format!("docker stop {} || true", container),
            "docker:rm": format!("docker rm {} || true", container),
            "docker:logs": format!("docker logs {}", container),
            "docker:logs:follow": format!("docker logs -f {}", container),
            "docker:shell": format!("docker exec -it {} sh", container),
            "db:studio": format!("open http://localhost:{}/_/", BACKEND_PORT),
            "deploy": "fly deploy",
        },
        "keywords": ["pocketbase", "fly", "CMS", "deployment"],
        "license": "MIT",
    });
    // json! output is deterministic and the value is a plain object.
    serde_json::to_string_pretty(&pkg).unwrap_or_default()
}

/// fly.toml for deploying the PocketBase app.
pub fn fly_toml(project: &str) -> String {
    format!(
        r#"app = "{project}"

[http_service]
  type = "requests"
  soft_limit = 500
  hard_limit = 550

[mounts]
  source = "pbdata"
  destination = "/pb/pb_data"
"#,
        project = project,
    )
}

/// Skeleton .env.local for local development.
pub fn env_local() -> &'static str {
    "# Local Development\n\
     PB_ADMIN_EMAIL=\n\
     PB_ADMIN_PASSWORD=\n\
     FLY_API_TOKEN=\n"
}

/// .env.example documenting the expected values.
pub fn env_example() -> &'static str {
    "# Copy this to .env.local and fill in values\n\
     PB_ADMIN_EMAIL=admin@example.com\n\
     PB_ADMIN_PASSWORD=your_password\n\
     FLY_API_TOKEN=your_token\n"
}

/// Project .gitignore.
pub fn gitignore() -> &'static str {
    "pb_data/*\n\
     !pb_data/.gitignore\n\
     \n\
     node_modules/\n\
     npm-debug.log*\n\
     \n\
     .env\n\
     .env.local\n\
     .env.*.local\n\
     \n\
     .vscode/*\n\
     !.vscode/extensions.json\n\
     .idea\n\
     .DS_Store\n"
}

/// Project README.
pub fn readme(project: &str) -> String {
    format!(
        r#"# {project}

> Full-stack web application with Astro and PocketBase

## Development

```bash
# Start PocketBase
onc pb start

# Start the Astro dev server
cd apps/web && npm run dev
```

PocketBase Admin UI: http://localhost:{port}/_/

## Project Structure

```
{project}/
├── apps/
│   ├── web/          # Astro app
│   └── pb/           # PocketBase
│       ├── pb_data/
│       ├── pb_migrations/
│       └── pb_hooks/
└── .github/
    └── workflows/
```

## Deployment

```bash
onc deploy
```
"#,
        project = project,
        port = BACKEND_PORT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dockerfile_pins_version_and_port() {
        let df = dockerfile("0.23.4");
        assert!(df.contains("ARG PB_VERSION=0.23.4"));
        assert!(df.contains("EXPOSE 8090"));
        assert!(df.contains("0.0.0.0:8090"));
    }

    #[test]
    fn test_package_json_uses_suffixed_container() {
        let pkg = package_json("demo");
        let parsed: serde_json::Value = serde_json::from_str(&pkg).unwrap();
        assert_eq!(parsed["name"], "demo");
        assert_eq!(parsed["scripts"]["docker:start"], "docker start demo-pb");
        assert!(parsed["scripts"]["docker:run"]
            .as_str()
            .unwrap()
            .contains("-p 8090:8090"));
    }

    #[test]
    fn test_fly_toml_names_the_app() {
        let toml = fly_toml("demo");
        assert!(toml.starts_with("app = \"demo\""));
        assert!(toml.contains("destination = \"/pb/pb_data\""));
    }

    #[test]
    fn test_readme_mentions_admin_ui() {
        assert!(readme("demo").contains("http://localhost:8090/_/"));
    }
}
