pub mod doctor;
pub mod empty_folders;
pub mod folders;
pub mod orphans;
pub mod output;
pub mod references;
pub mod settings;

use std::path::Path;

use linkaudit_core::SettingsStore;
use linkaudit_core::config::{ConfigLoader, ResolvedConfig};

use crate::OutputFormat;
use crate::host::FsVault;

/// Load configuration or exit with status 1.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Open the configured vault or exit with status 1.
pub fn open_vault(rc: &ResolvedConfig) -> FsVault {
    let opened = if rc.excluded_folders.is_empty() {
        FsVault::open(&rc.vault_root)
    } else {
        FsVault::with_exclusions(&rc.vault_root, rc.excluded_folders.clone())
    };
    match opened {
        Ok(vault) => vault,
        Err(e) => {
            eprintln!("Error opening vault: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load persisted settings or exit with status 1.
pub fn load_settings(rc: &ResolvedConfig) -> SettingsStore {
    match SettingsStore::load(&rc.settings_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
