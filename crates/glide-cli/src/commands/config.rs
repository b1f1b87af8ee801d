use std::path::Path;

use anyhow::Result;

use glide_core::AppConfig;

pub fn run(config_path: &Path, write: bool) -> Result<()> {
    if !write {
        println!("{}", config_path.display());
        if !config_path.exists() {
            println!("(not created yet; `glide config --write` writes the defaults)");
        }
        return Ok(());
    }

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    AppConfig::default().save_to(config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
