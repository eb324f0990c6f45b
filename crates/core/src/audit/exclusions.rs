//! Files that never take part in an audit, neither as link sources nor as
//! candidates.

use crate::vault::VaultFile;

/// File name excluded wherever it appears in the vault.
pub const TASKS_FILE_NAME: &str = "Tasks.md";

/// Any file whose name contains this marker is excluded.
pub const HIGHLIGHTS_MARKER: &str = ".highlights";

/// Whether `file` is skipped by both the reference index and the orphan scan.
pub fn is_excluded(file: &VaultFile) -> bool {
    file.name == TASKS_FILE_NAME || file.name.contains(HIGHLIGHTS_MARKER)
}
