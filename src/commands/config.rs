use crate::commands::status::resolve_project_root;
use crate::core::{
    config::Settings,
    error::Result,
    output::{print_section_header, print_success},
};
use colored::*;

/// Show or change the persisted settings of the project in the current
/// directory. No name lists everything, a name alone prints one value, a name
/// with a value updates and saves.
pub fn execute_config(name: Option<String>, value: Option<String>) -> Result<()> {
    let project_root = resolve_project_root(None)?;
    let mut settings = Settings::load_or_create(&project_root)?;

    match (name, value) {
        (Some(name), Some(value)) => {
            settings.set(&name, &value)?;
            settings.save(&project_root)?;
            print_success(&format!("{name} set to {value}"));
        }
        (Some(name), None) => {
            println!("{}", settings.get(&name)?);
        }
        (None, _) => {
            print_section_header("Settings");
            for (name, value) in settings.entries() {
                // Pad before coloring so the escape codes stay out of the width
                let label = format!("{:<13}", format!("{name}:"));
                println!("  {} {}", label.bright_black(), value.white());
            }
            println!();
            let label = format!("{:<13}", "file:");
            println!(
                "  {} {}",
                label.bright_black(),
                Settings::settings_file(&project_root)?.display().to_string().white()
            );
        }
    }

    Ok(())
}
