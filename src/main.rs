use clap::Parser;
use colored::Colorize;

use create_mern::commands::new_project::{self, Mode};
use create_mern::exec::SystemRunner;

#[derive(Parser)]
#[command(
    name = "create-mern",
    version,
    about = "Scaffold a MERN-stack project — Express API, React/Vite frontend, or both"
)]
struct Cli {
    /// Name of the project directory to create
    name: String,

    /// Which half of the stack to generate
    #[arg(value_enum, default_value = "full")]
    mode: Mode,
}

fn main() {
    // --help and --version also surface as parse "errors"; only genuine
    // usage errors exit 1.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").as_str().red());
            std::process::exit(1);
        }
    };

    if let Err(e) = new_project::run(&cli.name, cli.mode, &cwd, &SystemRunner) {
        eprintln!("{}", format!("Error: {e}").as_str().red());
        std::process::exit(e.exit_code());
    }
}
