//! Vault audits: unreferenced files and empty folders.
//!
//! [`LinkAudit`] bundles a vault collaborator with the current [`Settings`]
//! and exposes the operations a host calls. Every call reads a fresh
//! snapshot from the vault; nothing is cached between calls.

pub mod errors;
pub mod exclusions;
pub mod folders;
pub mod orphans;
pub mod references;

pub use errors::AuditError;
pub use exclusions::is_excluded;
pub use folders::{all_folder_paths, empty_folders, folder_paths};
pub use orphans::{AuditResult, ProgressFn, find_orphans, reference_variants};
pub use references::{ReferenceSet, build_reference_set};

use serde::Serialize;

use crate::settings::Settings;
use crate::vault::{VaultError, VaultSource};

/// Empty folders together with the full folder listing they were found in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyFolderReport {
    pub empty_folders: Vec<String>,
    /// Every folder implied by a file path in the vault.
    pub all_folders: Vec<String>,
}

pub struct LinkAudit<'a, V: VaultSource + ?Sized> {
    vault: &'a V,
    settings: Settings,
}

impl<'a, V: VaultSource + ?Sized> LinkAudit<'a, V> {
    pub fn new(vault: &'a V, settings: Settings) -> Self {
        Self { vault, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Folders offered as audit targets.
    pub fn folder_paths(&self) -> Result<Vec<String>, VaultError> {
        Ok(folder_paths(&self.vault.list_all_files()?))
    }

    /// Audit the subtree under `folder`.
    pub fn orphan_files(
        &self,
        folder: &str,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<AuditResult, AuditError> {
        find_orphans(self.vault, folder, &self.settings, on_progress)
    }

    pub fn empty_folders(&self) -> Result<EmptyFolderReport, VaultError> {
        let root = self.vault.root_folder()?;
        let files = self.vault.list_all_files()?;
        Ok(EmptyFolderReport {
            empty_folders: empty_folders(&root),
            all_folders: all_folder_paths(&files),
        })
    }
}
