//! aiseed CLI - Scaffold and check reproducible AI/NLP projects

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(name = "aiseed")]
#[command(about = "Scaffold and check reproducible AI/NLP projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Init(InitArgs),
    /// Run scripts/check_env.py in the current folder
    Doctor,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Name of the new AI project (Python identifier)
    pub name: String,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let code = match args.command {
        Some(Command::Init(init)) => run_init(&init.name).await,
        Some(Command::Doctor) => run_doctor().await,
        None => {
            // No subcommand provided: show help, fail the invocation.
            let _ = Args::command().print_help();
            1
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    std::process::exit(code);
}

async fn run_init(name: &str) -> i32 {
    match aiseed_core::tui::run_init(name).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            1
        }
    }
}

async fn run_doctor() -> i32 {
    match aiseed_core::runtime::doctor::run().await {
        // The check script's own exit code, surfaced unchanged.
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            1
        }
    }
}
