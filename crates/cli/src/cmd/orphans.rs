//! Orphans command implementation.

use std::io::Write;
use std::path::Path;

use linkaudit_core::{AuditError, AuditResult, LinkAudit, Settings};
use serde::Serialize;
use tracing::info;

use super::output::{FileOutput, print_files_quiet, print_files_table, print_json};
use super::{load_config, load_settings, open_vault, resolve_format};
use crate::{OrphansArgs, OutputFormat};

/// Orphan report for JSON output.
#[derive(Debug, Serialize)]
struct OrphanReport {
    folder: String,
    total_analyzed: usize,
    orphan_files: Vec<FileOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referenced_files: Option<Vec<FileOutput>>,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: OrphansArgs) {
    let Some(folder) = args.folder.as_deref().filter(|f| !f.trim().is_empty()) else {
        no_folder_selected();
    };

    let rc = load_config(config, profile);
    let vault = open_vault(&rc);
    let store = load_settings(&rc);

    let settings = Settings {
        show_referenced: store.settings().show_referenced || args.show_referenced,
    };
    let audit = LinkAudit::new(&vault, settings);

    info!(folder, show_referenced = settings.show_referenced, "auditing folder");

    let mut report_progress = |current: usize, total: usize| {
        eprint!("\rChecking file {} of {}...", current, total);
        std::io::stderr().flush().ok();
    };
    let progress: Option<&mut dyn FnMut(usize, usize)> =
        if args.progress { Some(&mut report_progress) } else { None };

    let result = match audit.orphan_files(folder, progress) {
        Ok(result) => result,
        Err(AuditError::NoFolderSelected) => no_folder_selected(),
        Err(e) => {
            eprintln!("\nError auditing folder: {}", e);
            std::process::exit(1);
        }
    };

    if args.progress && result.total_analyzed > 0 {
        eprintln!();
    }

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_table(folder, &result, settings.show_referenced),
        OutputFormat::Json => print_json(&OrphanReport {
            folder: folder.to_string(),
            total_analyzed: result.total_analyzed,
            orphan_files: result.orphan_files.iter().map(FileOutput::from).collect(),
            referenced_files: settings
                .show_referenced
                .then(|| result.referenced_files.iter().map(FileOutput::from).collect()),
        }),
        OutputFormat::Quiet => print_files_quiet(&result.orphan_files),
    }
}

fn print_table(folder: &str, result: &AuditResult, show_referenced: bool) {
    println!("Orphan files in: {}", folder);
    println!("Total files analysed: {}", result.total_analyzed);
    println!();

    if !result.orphan_files.is_empty() {
        println!("{} file(s) without references:", result.orphan_files.len());
    }
    print_files_table(&result.orphan_files, "All files are referenced.");

    if show_referenced && !result.referenced_files.is_empty() {
        println!();
        println!("{} file(s) with references:", result.referenced_files.len());
        print_files_table(&result.referenced_files, "");
    }
}

fn no_folder_selected() -> ! {
    eprintln!("No folder selected.");
    eprintln!("Hint: Run 'linkaudit folders' to list folders that can be audited.");
    std::process::exit(2);
}
