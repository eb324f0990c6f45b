//! Audit core for markdown vaults.
//!
//! Finds files inside a folder that nothing links to or embeds, and folders
//! that hold nothing at all. The core reads a vault through the
//! [`vault::VaultSource`] trait and never modifies it.

pub mod audit;
pub mod config;
pub mod settings;
pub mod vault;

pub use audit::{AuditError, AuditResult, EmptyFolderReport, LinkAudit};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use vault::{VaultError, VaultFile, VaultSnapshot, VaultSource};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
