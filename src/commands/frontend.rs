use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;
use crate::exec::{CommandRunner, Invocation};

use super::templates;

/// Subdirectories created under `frontend/src`.
const SRC_DIRS: &[&str] = &["components", "pages", "services"];

/// Generate the React/Vite frontend under `<project>/frontend`.
///
/// `npm create vite` lays down the starter; the remaining steps install
/// routing/HTTP/Tailwind packages and overwrite the starter's config and
/// entry files. Steps run strictly in order; the first failure aborts and
/// nothing is rolled back.
pub fn generate(project_path: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    let frontend_path = project_path.join("frontend");

    println!(
        "{} Setting up React frontend (Vite + Tailwind)...",
        "->".blue()
    );

    // CI=true keeps the vite scaffolder from prompting.
    runner.run(
        &Invocation::new(
            "npm",
            &["create", "vite@latest", "frontend", "--", "--template", "react"],
            project_path,
        )
        .env("CI", "true"),
    )?;

    println!("{} Installing frontend dependencies...", "->".blue());
    runner.run(&Invocation::new("npm", &["install"], &frontend_path))?;
    runner.run(&Invocation::new(
        "npm",
        &["install", "react-router-dom", "axios"],
        &frontend_path,
    ))?;
    runner.run(&Invocation::new(
        "npm",
        &["install", "-D", "tailwindcss", "postcss", "autoprefixer"],
        &frontend_path,
    ))?;

    runner.run(&Invocation::new(
        "npx",
        &["tailwindcss", "init", "-p"],
        &frontend_path,
    ))?;
    println!("{} Tailwind installed", "->".blue());

    // Everything below lands inside the starter's src/ tree.
    fs::create_dir_all(frontend_path.join("src"))?;

    fs::write(
        frontend_path.join("tailwind.config.js"),
        templates::frontend::tailwind_config(),
    )?;
    fs::write(
        frontend_path.join("src/index.css"),
        templates::frontend::index_css(),
    )?;

    for dir in SRC_DIRS {
        fs::create_dir_all(frontend_path.join("src").join(dir))?;
    }

    fs::write(
        frontend_path.join("src/pages/Home.jsx"),
        templates::frontend::home_page(),
    )?;
    fs::write(
        frontend_path.join("src/App.jsx"),
        templates::frontend::app_jsx(),
    )?;

    println!("{} Frontend setup complete", "✓".green());
    Ok(())
}
