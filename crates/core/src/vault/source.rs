//! The vault collaborator consumed by the audit core.

use thiserror::Error;

use super::types::{FolderNode, LinkCache, VaultFile};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to list vault contents under {0}: {1}")]
    ListError(String, #[source] std::io::Error),

    #[error("no metadata available for {path}: {reason}")]
    MetadataError { path: String, reason: String },
}

/// Read-only view of a vault: its files, their link metadata and its folder tree.
///
/// Every audit operation works against one of these. Errors raised here are
/// collaborator defects and propagate unchanged to the caller.
pub trait VaultSource {
    /// Every file in the vault, in the collaborator's enumeration order.
    fn list_all_files(&self) -> Result<Vec<VaultFile>, VaultError>;

    /// Only the markdown documents.
    fn list_markdown_files(&self) -> Result<Vec<VaultFile>, VaultError>;

    /// Links and embeds extracted from `file`, or `None` when nothing is cached.
    fn link_cache(&self, file: &VaultFile) -> Result<Option<LinkCache>, VaultError>;

    /// The root of the folder tree.
    fn root_folder(&self) -> Result<FolderNode, VaultError>;
}
