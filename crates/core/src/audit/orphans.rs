//! Orphan detection for one folder subtree.

use serde::Serialize;
use tracing::debug;

use super::errors::AuditError;
use super::exclusions::is_excluded;
use super::references::{ReferenceSet, build_reference_set};
use crate::settings::Settings;
use crate::vault::{VaultFile, VaultSource};

/// Progress callback: `(current, total)`, with `current` counting from 1.
pub type ProgressFn<'a> = &'a mut dyn FnMut(usize, usize);

/// Outcome of auditing one folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    /// Candidates that no link or embed points at.
    pub orphan_files: Vec<VaultFile>,
    /// Referenced candidates. Only populated when `show_referenced` is on.
    pub referenced_files: Vec<VaultFile>,
    /// Every candidate considered, whether shown or not.
    pub total_analyzed: usize,
}

/// The spellings under which `file` may appear as a link target.
///
/// Basename, file name, path without a trailing `.md`, full path, and the
/// full path with backslashes turned into forward slashes. Duplicates are
/// dropped, first occurrence wins.
pub fn reference_variants(file: &VaultFile) -> Vec<String> {
    let candidates = [
        file.basename.clone(),
        file.name.clone(),
        file.path.strip_suffix(".md").unwrap_or(&file.path).to_string(),
        file.path.clone(),
        file.path.replace('\\', "/"),
    ];

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// Whether any spelling of `file` is present in `references`.
pub fn is_referenced(file: &VaultFile, references: &ReferenceSet) -> bool {
    reference_variants(file).iter().any(|v| references.contains(v))
}

/// Files strictly below `folder` that take part in the audit, in vault order.
pub fn candidate_files(files: Vec<VaultFile>, folder: &str) -> Vec<VaultFile> {
    let prefix = format!("{folder}/");
    files.into_iter().filter(|f| f.path.starts_with(&prefix) && !is_excluded(f)).collect()
}

/// Classify every file under `target_folder` as referenced or orphaned.
///
/// `target_folder` must name a folder; a trailing slash is ignored. An empty
/// or whitespace-only folder name is rejected with [`AuditError::NoFolderSelected`] rather than
/// auditing the whole vault. `on_progress` runs once per file, after it has
/// been classified.
pub fn find_orphans<V: VaultSource + ?Sized>(
    vault: &V,
    target_folder: &str,
    settings: &Settings,
    mut on_progress: Option<ProgressFn<'_>>,
) -> Result<AuditResult, AuditError> {
    let folder = target_folder.trim_end_matches('/');
    if folder.trim().is_empty() {
        return Err(AuditError::NoFolderSelected);
    }

    let candidates = candidate_files(vault.list_all_files()?, folder);
    let references = build_reference_set(vault)?;
    let total = candidates.len();

    let mut result = AuditResult { total_analyzed: total, ..AuditResult::default() };

    for (idx, file) in candidates.into_iter().enumerate() {
        if !is_referenced(&file, &references) {
            result.orphan_files.push(file);
        } else if settings.show_referenced {
            result.referenced_files.push(file);
        }

        if let Some(cb) = on_progress.as_deref_mut() {
            cb(idx + 1, total);
        }
    }

    debug!(
        folder,
        total,
        orphans = result.orphan_files.len(),
        referenced_shown = result.referenced_files.len(),
        "orphan audit finished"
    );

    Ok(result)
}
