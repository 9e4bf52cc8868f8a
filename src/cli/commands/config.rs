use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::process::Command;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let config = Config::load();
            println!("📄 Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(&config)
                    .map_err(|e| AppError::Config(e.to_string()))?
            );
        }

        if *edit_config {
            let path = Config::config_file();

            // Default editor based on the platform
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();
            match status {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully with '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    let fallback = Command::new(&default_editor).arg(&path).status()?;
                    if !fallback.success() {
                        return Err(AppError::Config(format!(
                            "Could not open an editor for {}",
                            path.display()
                        )));
                    }
                }
            }
        }

        if !*print_config && !*edit_config {
            info("Nothing to do: use `config --print` or `config --edit`.");
        }
    }
    Ok(())
}
