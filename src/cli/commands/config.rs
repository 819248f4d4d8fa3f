use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if (*check || *run_migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {} (run `rtimesheet init`)",
                path.display()
            ));
        } else {
            if *check {
                let missing = migrate::missing_fields(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rtimesheet config --migrate` to add them with default values.");
                }
            }

            if *run_migrate {
                migrate::migrate_config(&path)?;
            }
        }

        if *edit_config {
            edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

/// Open the config file in `requested`, or in $EDITOR / $VISUAL / the
/// platform editor when that is missing or fails.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| platform_editor().to_string());

    let mut candidates = Vec::with_capacity(2);
    if let Some(editor) = requested.filter(|e| *e != fallback) {
        candidates.push(editor.to_string());
    }
    candidates.push(fallback);

    for editor in &candidates {
        let ok = Command::new(editor)
            .arg(path)
            .status()
            .is_ok_and(|s| s.success());
        if ok {
            success(format!("{} saved with '{}'", path.display(), editor));
            return Ok(());
        }
        warning(format!("Editor '{}' did not complete", editor));
    }

    Err(AppError::Config(format!(
        "could not edit {} with {}",
        path.display(),
        candidates.join(" or ")
    )))
}

fn platform_editor() -> &'static str {
    if cfg!(windows) { "notepad" } else { "nano" }
}
