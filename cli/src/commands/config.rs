use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::{self, ConfigSource};
use crate::ui;

pub fn validate(config_path: Option<&Path>) -> Result<()> {
    ui::print_step("Validating configuration...");

    let (config, source) = config::load(config_path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", source))?;

    ui::print_success("Configuration is valid!");
    println!();
    ui::print_field("Source", &source.to_string());
    ui::print_field("Permitted kinds", &config.policy().describe());
    ui::print_field("Runtime path", &config.runtime_path);

    if source == ConfigSource::Defaults {
        println!();
        println!(
            "  No {} found; using the built-in defaults",
            streamgen_engine::config::CONFIG_FILE_NAME.cyan()
        );
    }

    Ok(())
}

pub fn show(config_path: Option<&Path>) -> Result<()> {
    let (config, source) = config::load(config_path)?;
    let rendered =
        toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

    println!("{}", format!("# source: {}", source).dimmed());
    print!("{}", rendered);
    Ok(())
}
