//! Settings command: inspect and toggle persisted audit settings.

use std::path::Path;

use linkaudit_core::Settings;
use tracing::info;

use super::{load_config, load_settings};
use crate::{SettingsArgs, SettingsCommand};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: SettingsArgs) {
    let rc = load_config(config, profile);
    let mut store = load_settings(&rc);

    match args.command.unwrap_or(SettingsCommand::Show) {
        SettingsCommand::Show => {
            println!("settings_file: {}", store.path().display());
            println!("show_referenced: {}", store.settings().show_referenced);
        }
        SettingsCommand::SetShowReferenced { value } => {
            store.set(Settings { show_referenced: value });
            if let Err(e) = store.save() {
                eprintln!("Error saving settings: {}", e);
                std::process::exit(1);
            }
            info!(show_referenced = value, "settings updated");
            println!("show_referenced: {}", value);
        }
    }
}
