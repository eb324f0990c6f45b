//! Empty folders command implementation.

use std::path::Path;

use linkaudit_core::{LinkAudit, Settings};

use super::output::{print_folders_quiet, print_folders_table, print_json};
use super::{load_config, open_vault, resolve_format};
use crate::{EmptyFoldersArgs, OutputFormat};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: EmptyFoldersArgs) {
    let rc = load_config(config, profile);
    let vault = open_vault(&rc);
    let audit = LinkAudit::new(&vault, Settings::default());

    let report = match audit.empty_folders() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error walking folders: {}", e);
            std::process::exit(1);
        }
    };

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => {
            println!("Empty folders");
            if !report.empty_folders.is_empty() {
                println!("Total: {} empty folder(s).", report.empty_folders.len());
            }
            print_folders_table(&report.empty_folders, "No empty folders found.");
            println!();
            println!("All folders in the vault");
            println!("Total folders: {}", report.all_folders.len());
            print_folders_table(&report.all_folders, "(no folders)");
        }
        OutputFormat::Json => print_json(&report),
        OutputFormat::Quiet => print_folders_quiet(&report.empty_folders),
    }
}
