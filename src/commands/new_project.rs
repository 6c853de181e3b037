use clap::ValueEnum;
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;
use crate::exec::{CommandRunner, Invocation};

use super::{backend, frontend};

/// Generation scope selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Express + Mongoose API only
    Backend,
    /// React/Vite app only
    Frontend,
    /// Backend first, then frontend
    Full,
}

/// Scaffold a new project named `name` under `cwd`.
///
/// Validates the project name, refuses to touch an existing directory,
/// checks npm is reachable, then dispatches to the generators selected by
/// `mode`. The first failing step aborts the run; whatever is already on
/// disk stays there.
pub fn run(
    name: &str,
    mode: Mode,
    cwd: &Path,
    runner: &dyn CommandRunner,
) -> Result<(), ScaffoldError> {
    validate_name(name)?;

    let project_path = cwd.join(name);
    if project_path.exists() {
        return Err(ScaffoldError::Collision(project_path));
    }

    // Every install step below goes through npm.
    if runner
        .run(&Invocation::new("npm", &["--version"], cwd))
        .is_err()
    {
        eprintln!(
            "{} npm was not found on PATH. Install Node.js first: https://nodejs.org",
            "!".yellow()
        );
        return Err(ScaffoldError::Subprocess {
            command: "npm --version".to_string(),
            status: None,
        });
    }

    fs::create_dir(&project_path)?;
    println!("{} Project folder created: {}", "->".blue(), name.green());

    match mode {
        Mode::Backend => backend::generate(&project_path, runner)?,
        Mode::Frontend => frontend::generate(&project_path, runner)?,
        Mode::Full => {
            backend::generate(&project_path, runner)?;
            frontend::generate(&project_path, runner)?;
        }
    }

    print_summary(name, mode);
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let valid = !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ScaffoldError::Usage(format!(
            "'{name}' is not a valid project name (use letters, digits, '-' or '_')"
        )))
    }
}

fn print_summary(name: &str, mode: Mode) {
    println!();
    println!(
        "{} Project '{}' created successfully!",
        "✓".green(),
        name.green()
    );
    println!();

    if matches!(mode, Mode::Backend | Mode::Full) {
        println!("  cd {name}/backend && npm run dev");
        println!(
            "  API:      {}",
            format!("http://localhost:{}", backend::DEFAULT_PORT).cyan()
        );
    }
    if matches!(mode, Mode::Frontend | Mode::Full) {
        println!("  cd {name}/frontend && npm run dev");
    }
}
