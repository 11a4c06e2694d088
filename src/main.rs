use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use vcs_overlay::commands::*;
use vcs_overlay::core::print_error;

#[derive(Parser)]
#[command(name = "vcs-overlay")]
#[command(about = "Status overlay and action launcher for SVN, Git and Mercurial working copies")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the project tree with per-path status badges
    Status {
        /// Project root (default: current directory)
        path: Option<PathBuf>,
    },
    /// Bring the working copy up to date (pull for Git)
    Update {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Commit changes via the graphical client
    Commit {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Publish local commits (not available for SVN)
    Push {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Show history for a path
    Log {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Clean up the working copy
    Cleanup {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Start tracking a path (and its sidecar file)
    Add {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Discard local changes to a path
    Revert {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Rename a path, moving its sidecar file first
    Rename {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Delete a path from version control
    Delete {
        /// File or directory to act on (default: project root)
        path: Option<PathBuf>,
    },
    /// Show or change settings (vcs, overlay, only-changed, executables, timeout)
    Config {
        /// Setting name (omit to list everything)
        name: Option<String>,
        /// New value (omit to print the current one)
        value: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Status { path } => execute_status(path),
        Commands::Update { path } => execute_action(VcsAction::Update, path),
        Commands::Commit { path } => execute_action(VcsAction::Commit, path),
        Commands::Push { path } => execute_action(VcsAction::Push, path),
        Commands::Log { path } => execute_action(VcsAction::Log, path),
        Commands::Cleanup { path } => execute_action(VcsAction::Cleanup, path),
        Commands::Add { path } => execute_action(VcsAction::Add, path),
        Commands::Revert { path } => execute_action(VcsAction::Revert, path),
        Commands::Rename { path } => execute_action(VcsAction::Rename, path),
        Commands::Delete { path } => execute_action(VcsAction::Delete, path),
        Commands::Config { name, value } => execute_config(name, value),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
