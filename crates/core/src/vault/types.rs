//! Snapshot types handed to the audit core by a vault collaborator.

use serde::Serialize;

/// A single stored document or asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VaultFile {
    /// Slash-separated path relative to the vault root. Unique key.
    pub path: String,
    /// Final path segment including extension.
    pub name: String,
    /// Final path segment without extension.
    pub basename: String,
}

impl VaultFile {
    /// Build a file entry from its vault-relative path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        let basename = match name.rfind('.') {
            Some(idx) if idx > 0 => name[..idx].to_string(),
            _ => name.clone(),
        };
        Self { path, name, basename }
    }

    /// Path of the folder containing this file, if it is not at the root.
    pub fn parent(&self) -> Option<&str> {
        self.path.rfind('/').map(|idx| &self.path[..idx])
    }

    pub fn is_markdown(&self) -> bool {
        self.path.ends_with(".md")
    }
}

/// One outgoing link or embed, as written in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub target: String,
}

impl LinkRecord {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

/// Cached link metadata for one markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCache {
    pub links: Vec<LinkRecord>,
    pub embeds: Vec<LinkRecord>,
}

/// A child of a folder: either a nested folder or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Folder(FolderNode),
    File(VaultFile),
}

/// A folder in the vault tree.
///
/// The tree is acyclic by construction: children are owned values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub path: String,
    pub children: Vec<TreeNode>,
}

impl FolderNode {
    /// Path used for the vault root folder.
    pub const ROOT_PATH: &'static str = "/";

    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), children: Vec::new() }
    }

    pub fn root() -> Self {
        Self::new(Self::ROOT_PATH)
    }

    pub fn has_files(&self) -> bool {
        self.children.iter().any(|c| matches!(c, TreeNode::File(_)))
    }

    pub fn has_subfolders(&self) -> bool {
        self.children.iter().any(|c| matches!(c, TreeNode::Folder(_)))
    }

    pub fn subfolders(&self) -> impl Iterator<Item = &FolderNode> {
        self.children.iter().filter_map(|c| match c {
            TreeNode::Folder(f) => Some(f),
            TreeNode::File(_) => None,
        })
    }
}
