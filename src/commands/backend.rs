use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;
use crate::exec::{CommandRunner, Invocation};

use super::templates;

/// Port the generated server listens on unless its environment overrides it.
pub const DEFAULT_PORT: u16 = 5000;

/// Subdirectories created under `backend/src`.
const SRC_DIRS: &[&str] = &["config", "controllers", "routes", "models", "middlewares"];

/// Generate the Express + Mongoose API skeleton under `<project>/backend`.
///
/// Creates the source tree, runs `npm init`/`npm install` in the new
/// directory, rewrites the manifest npm produced, then writes the server
/// sources. Steps run strictly in order; the first failure aborts and
/// nothing is rolled back.
pub fn generate(project_path: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    let backend_path = project_path.join("backend");

    println!("{} Setting up backend...", "->".blue());

    for dir in SRC_DIRS {
        fs::create_dir_all(backend_path.join("src").join(dir))?;
    }
    println!("{} Backend folder structure created", "->".blue());

    println!("{} Initializing npm project...", "->".blue());
    runner.run(&Invocation::new("npm", &["init", "-y"], &backend_path))?;

    println!("{} Installing dependencies...", "->".blue());
    runner.run(&Invocation::new(
        "npm",
        &["install", "express", "mongoose", "dotenv", "cors"],
        &backend_path,
    ))?;
    runner.run(&Invocation::new(
        "npm",
        &["install", "-D", "nodemon"],
        &backend_path,
    ))?;

    update_manifest(&backend_path)?;

    fs::write(backend_path.join("src/app.js"), templates::backend::app_js())?;
    fs::write(
        backend_path.join("src/server.js"),
        templates::backend::server_js(DEFAULT_PORT),
    )?;
    fs::write(
        backend_path.join(".env"),
        templates::backend::env_file(DEFAULT_PORT),
    )?;
    fs::write(
        backend_path.join("src/controllers/sample.controller.js"),
        templates::backend::sample_controller(),
    )?;
    fs::write(
        backend_path.join("src/routes/sample.routes.js"),
        templates::backend::sample_route(),
    )?;

    println!("{} Backend setup completed", "✓".green());
    Ok(())
}

/// Set `"type": "module"` and the start/dev scripts in the manifest that
/// `npm init -y` produced, leaving every other field as npm wrote it.
fn update_manifest(backend_path: &Path) -> Result<(), ScaffoldError> {
    let manifest_path = backend_path.join("package.json");
    let content = fs::read_to_string(&manifest_path)?;
    let mut manifest: serde_json::Value = serde_json::from_str(&content)?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::Manifest("root is not an object".to_string()))?;

    root.insert("type".to_string(), json!("module"));
    root.insert(
        "scripts".to_string(),
        json!({
            "start": "node src/server.js",
            "dev": "nodemon src/server.js",
        }),
    );

    fs::write(
        &manifest_path,
        format!("{}\n", serde_json::to_string_pretty(&manifest)?),
    )?;
    println!("{} package.json updated", "->".blue());
    Ok(())
}
