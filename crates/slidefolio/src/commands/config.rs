use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    println!("{} {}", "Config file:".bold(), path.display());

    let config = Config::load_or_default();
    let navigator = config.navigator();
    println!();
    println!("  viewer.theme       {}", config.theme_name().cyan());
    println!(
        "  viewer.media_base  {}",
        config
            .media_base()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(catalog directory)".dimmed().to_string())
    );
    println!(
        "  viewer.settle_ms   {}",
        navigator.settle_delay.as_millis().to_string().cyan()
    );
    println!(
        "  viewer.close_ms    {}",
        navigator.close_delay.as_millis().to_string().cyan()
    );
    println!(
        "  viewer.fullscreen  {}",
        config.fullscreen().to_string().cyan()
    );

    if !path.exists() {
        println!();
        println!(
            "{}",
            "No config file yet; showing defaults. Use `slidefolio config set` to create one."
                .dimmed()
        );
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::debug!(key, value, "config updated");
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
