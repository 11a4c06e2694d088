use crate::core::{
    config::Settings,
    engine::StatusEngine,
    error::{Result, VcsOverlayError},
    invoker::ConsoleRunner,
    output::format_badge,
    status::VcsStatus,
};
use colored::*;
use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn execute_status(path: Option<PathBuf>) -> Result<()> {
    let project_root = resolve_project_root(path)?;
    let settings = Settings::load_or_create(&project_root)?;
    let mut engine = StatusEngine::new(&project_root, &settings, Box::new(ConsoleRunner::new()))?;

    // One refresh scoped to the root directory covers every path in the tree
    let marker = engine.marker().to_string();
    let fresh = engine.ensure_fresh(&marker);

    println!();
    println!(
        "  {} {}",
        "Project:".bright_black(),
        project_root.display().to_string().white()
    );
    println!("  {} {}", "VCS:".bright_black(), engine.kind().to_string().white());
    println!();

    if settings.overlay && !fresh {
        println!(
            "  {}",
            format!(
                "Status unavailable ('{}' failed or produced nothing); listing without badges.",
                settings.console_executable()
            )
            .yellow()
        );
        println!();
    }

    print_tree(&project_root, &marker, &engine, &settings);
    println!();

    Ok(())
}

/// Turn an optional command-line path into a canonical project root.
///
/// Defaults to the current directory. Canonicalizing up front keeps cache keys
/// and the client working directory stable no matter how the root was spelled.
pub fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let requested = match path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    requested
        .canonicalize()
        .map_err(|_| VcsOverlayError::invalid_project_root(&requested))
}

fn print_tree(project_root: &Path, marker: &str, engine: &StatusEngine, settings: &Settings) {
    let walker = WalkDir::new(project_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !hidden_name(&entry.file_name().to_string_lossy()));

    for entry in walker.filter_map(|entry| entry.ok()) {
        let Some(key) = status_key(project_root, marker, entry.path()) else {
            continue;
        };
        let badge = format_badge(displayed_status(engine.status_of(&key), settings));
        let indent = "  ".repeat(entry.depth());
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            println!("  {badge}{indent}{name}/");
        } else {
            println!("  {badge}{indent}{name}");
        }
    }
}

/// Apply the display settings to a raw engine answer.
///
/// `None` means "render no badge": overlay switched off, status unavailable, or
/// an unchanged path under the only-changed filter.
fn displayed_status(status: Option<VcsStatus>, settings: &Settings) -> Option<VcsStatus> {
    if !settings.overlay {
        return None;
    }
    match status {
        Some(status) if settings.only_changed && !status.is_changed() => None,
        other => other,
    }
}

/// Cache key for a filesystem entry: the root marker plus the `/`-joined
/// relative path, matching the keys the status parser produces.
fn status_key(project_root: &Path, marker: &str, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(project_root).ok()?;
    let mut key = marker.to_string();
    for component in relative.components() {
        key.push('/');
        key.push_str(component.as_os_str().to_str()?);
    }
    Some(key)
}

/// Dot-entries are VCS bookkeeping (.git, .svn, .hg) or editor noise; the
/// original overlay never surfaced them either.
fn hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
