use linkaudit_core::SettingsStore;
use linkaudit_core::config::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   linkaudit doctor");
            println!("version: {}", linkaudit_core::version());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("vault_exists: {}", rc.vault_root.is_dir());
            println!("settings_file: {}", rc.settings_file.display());
            for folder in &rc.excluded_folders {
                println!("excluded: {}", folder.display());
            }
            match SettingsStore::load(&rc.settings_file) {
                Ok(store) => {
                    println!("settings.show_referenced: {}", store.settings().show_referenced)
                }
                Err(e) => println!("settings: {e}"),
            }
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL linkaudit doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
