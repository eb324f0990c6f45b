//! Shared output formatting for audit commands.

use linkaudit_core::VaultFile;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Row for file tables.
#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Row for folder tables.
#[derive(Tabled)]
struct FolderRow {
    #[tabled(rename = "Folder")]
    folder: String,
}

/// Formatted file for JSON output.
#[derive(Debug, Serialize)]
pub struct FileOutput {
    pub path: String,
    pub name: String,
    pub basename: String,
}

impl From<&VaultFile> for FileOutput {
    fn from(file: &VaultFile) -> Self {
        Self {
            path: file.path.clone(),
            name: file.name.clone(),
            basename: file.basename.clone(),
        }
    }
}

/// Print files as a table, or `empty_message` when there are none.
pub fn print_files_table(files: &[VaultFile], empty_message: &str) {
    if files.is_empty() {
        println!("{}", empty_message);
        return;
    }

    let rows: Vec<FileRow> = files
        .iter()
        .map(|f| FileRow { path: truncate(&f.path, 80), name: f.name.clone() })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

/// Print files as paths only (quiet mode).
pub fn print_files_quiet(files: &[VaultFile]) {
    for file in files {
        println!("{}", file.path);
    }
}

/// Print folders as a table, or `empty_message` when there are none.
pub fn print_folders_table(folders: &[String], empty_message: &str) {
    if folders.is_empty() {
        println!("{}", empty_message);
        return;
    }

    let rows: Vec<FolderRow> =
        folders.iter().map(|f| FolderRow { folder: truncate(f, 80) }).collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

/// Print folders one per line (quiet mode).
pub fn print_folders_quiet(folders: &[String]) {
    for folder in folders {
        println!("{}", folder);
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Truncate string with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
