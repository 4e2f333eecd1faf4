use anyhow::Result;
use clap::{Parser, Subcommand};
use glint::areas::repository::Repository;
use glint::artifacts::status::report::{PlainStyle, StyleStrategy, TerminalStyle};
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "glint",
    version = "0.1.0",
    about = "A friendly working tree status reporter",
    long_about = "Glint reports the status of files in a repository managed by a \
    simplified tracked/untracked engine: which tracked files carry modifications, \
    which files are untracked, and whether a merge or rebase is still waiting on \
    conflict resolution.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show the status of files in the repo",
        long_about = "This command classifies every relevant file as tracked-with-modifications \
        or untracked and prints a grouped report, optionally restricted to the given paths."
    )]
    Status {
        #[arg(help = "The specific path(s) to status")]
        paths: Vec<PathBuf>,
        #[arg(long, help = "Disable colored output")]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Status { paths, no_color } => {
            let cwd = std::env::current_dir()?;
            let mut repository = Repository::discover(&cwd, Box::new(std::io::stdout()))?;

            let style: Box<dyn StyleStrategy> = if *no_color || !std::io::stdout().is_terminal() {
                Box::new(PlainStyle)
            } else {
                Box::new(TerminalStyle)
            };

            repository.status(paths, style.as_ref())?
        }
    }

    Ok(())
}
