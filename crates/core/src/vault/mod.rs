//! Vault snapshot model and the collaborator trait the audits read from.
//!
//! The audit core never touches the filesystem directly. A host supplies a
//! [`VaultSource`] exposing the file listing, per-document link metadata and
//! the folder tree; [`VaultSnapshot`] is an in-memory implementation.

pub mod snapshot;
pub mod source;
pub mod tree;
pub mod types;

pub use snapshot::VaultSnapshot;
pub use source::{VaultError, VaultSource};
pub use tree::build_folder_tree;
pub use types::{FolderNode, LinkCache, LinkRecord, TreeNode, VaultFile};
