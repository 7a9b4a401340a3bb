use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }

        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit");
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the config file in the requested editor, falling back to the
/// default one. The file is written first so there is something to edit.
fn edit(requested: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        let current = Config::load()?;
        Config::init_all(std::path::Path::new(&current.database), false)?;
    }

    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if matches!(Command::new(&first).arg(&path).status(), Ok(s) if s.success()) {
        success(format!("Configuration file edited using '{}'", first));
        return Ok(());
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        first, fallback
    ));

    if matches!(Command::new(&fallback).arg(&path).status(), Ok(s) if s.success()) {
        success(format!("Configuration file edited using fallback '{}'", fallback));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{}'",
            fallback
        ));
    }

    Ok(())
}
