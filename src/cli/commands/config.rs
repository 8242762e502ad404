use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_yaml;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_override: Option<&str>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        check,
        force,
    } = cmd
    {
        let path = Config::config_file(config_override);

        // ---- INIT ----
        if *init {
            Config::default().write_to(&path, *force)?;
            success(format!("Configuration file written: {}", path.display()));
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    path.display()
                ));
            } else {
                let report = check_yaml(&fs::read_to_string(&path)?)?;
                for key in &report.missing {
                    warning(format!("Missing key '{key}' (default applies)"));
                }
                for key in &report.unknown {
                    warning(format!("Unknown key '{key}'"));
                }
                if report.is_complete() {
                    success(format!("Configuration file is complete: {}", path.display()));
                }
            }
        }

        // ---- PRINT ----
        if *print_config || !(*init || *check) {
            println!("📄 Configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
