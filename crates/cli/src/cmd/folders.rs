//! Folders command: the folders an audit can target.

use std::path::Path;

use linkaudit_core::audit::{all_folder_paths, folder_paths};
use linkaudit_core::VaultSource;

use super::{load_config, open_vault};
use crate::FoldersArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: FoldersArgs) {
    let rc = load_config(config, profile);
    let vault = open_vault(&rc);

    let files = match vault.list_all_files() {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error listing vault files: {}", e);
            std::process::exit(1);
        }
    };

    let folders = if args.all { all_folder_paths(&files) } else { folder_paths(&files) };
    for folder in folders {
        println!("{}", folder);
    }
}
