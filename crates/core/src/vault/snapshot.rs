//! In-memory vault collaborator.

use std::collections::{BTreeSet, HashMap};

use super::source::{VaultError, VaultSource};
use super::tree::build_folder_tree;
use super::types::{FolderNode, LinkCache, LinkRecord, VaultFile};

/// A vault held entirely in memory.
///
/// Useful for hosts that already keep their own index, and for tests.
///
/// ```
/// use linkaudit_core::vault::{VaultSnapshot, VaultSource};
///
/// let vault = VaultSnapshot::new()
///     .file("Docs/A.md")
///     .links("Index.md", ["A"])
///     .folder("Docs/Sub");
///
/// assert_eq!(vault.list_all_files().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VaultSnapshot {
    files: Vec<VaultFile>,
    folders: BTreeSet<String>,
    caches: HashMap<String, LinkCache>,
}

impl VaultSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file. Re-registering an existing path is a no-op.
    pub fn file(mut self, path: &str) -> Self {
        self.insert_file(path);
        self
    }

    /// Register a folder, which may be empty.
    pub fn folder(mut self, path: &str) -> Self {
        let path = path.trim_matches('/');
        if !path.is_empty() {
            self.folders.insert(path.to_string());
        }
        self
    }

    /// Record outgoing links from `source`, registering it if needed.
    pub fn links<I, S>(mut self, source: &str, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_file(source);
        let cache = self.caches.entry(source.to_string()).or_default();
        cache.links.extend(targets.into_iter().map(LinkRecord::new));
        self
    }

    /// Record embeds from `source`, registering it if needed.
    pub fn embeds<I, S>(mut self, source: &str, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_file(source);
        let cache = self.caches.entry(source.to_string()).or_default();
        cache.embeds.extend(targets.into_iter().map(LinkRecord::new));
        self
    }

    fn insert_file(&mut self, path: &str) {
        if !self.files.iter().any(|f| f.path == path) {
            self.files.push(VaultFile::from_path(path));
        }
    }
}

impl VaultSource for VaultSnapshot {
    fn list_all_files(&self) -> Result<Vec<VaultFile>, VaultError> {
        Ok(self.files.clone())
    }

    fn list_markdown_files(&self) -> Result<Vec<VaultFile>, VaultError> {
        Ok(self.files.iter().filter(|f| f.is_markdown()).cloned().collect())
    }

    fn link_cache(&self, file: &VaultFile) -> Result<Option<LinkCache>, VaultError> {
        Ok(self.caches.get(&file.path).cloned())
    }

    fn root_folder(&self) -> Result<FolderNode, VaultError> {
        Ok(build_folder_tree(self.folders.iter().map(String::as_str), &self.files))
    }
}
