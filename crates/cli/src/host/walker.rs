//! Filesystem-backed vault: a directory of markdown files and assets.

use std::fs;
use std::path::{Path, PathBuf};

use linkaudit_core::vault::{
    FolderNode, LinkCache, VaultError, VaultFile, VaultSource, build_folder_tree,
};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::extractor::extract_links;

/// A vault rooted at a directory, listed once when opened.
///
/// Link metadata is read from disk on demand, so every audit sees the
/// current file contents.
#[derive(Debug)]
pub struct FsVault {
    root: PathBuf,
    files: Vec<VaultFile>,
    folders: Vec<String>,
}

impl FsVault {
    /// Open the vault at `root`.
    pub fn open(root: &Path) -> Result<Self, VaultError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Open the vault at `root`, skipping the given folders.
    ///
    /// Excluded folders can be relative to the vault root or absolute paths
    /// inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(VaultError::MissingRoot(root.display().to_string()));
        }

        // Normalize exclusions to be relative to root
        let excluded_folders: Vec<PathBuf> = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        let mut files = Vec::new();
        let mut folders = Vec::new();

        for entry in WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded(e, &root, &excluded_folders))
        {
            let entry = entry.map_err(|e| {
                VaultError::ListError(root.display().to_string(), e.into())
            })?;

            if entry.depth() == 0 {
                continue;
            }

            let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let vault_path = to_vault_path(relative);

            if entry.file_type().is_dir() {
                folders.push(vault_path);
            } else if entry.file_type().is_file() {
                files.push(VaultFile::from_path(vault_path));
            }
        }

        debug!(root = %root.display(), files = files.len(), folders = folders.len(), "opened vault");
        Ok(Self { root, files, folders })
    }
}

impl VaultSource for FsVault {
    fn list_all_files(&self) -> Result<Vec<VaultFile>, VaultError> {
        Ok(self.files.clone())
    }

    fn list_markdown_files(&self) -> Result<Vec<VaultFile>, VaultError> {
        Ok(self.files.iter().filter(|f| f.is_markdown()).cloned().collect())
    }

    fn link_cache(&self, file: &VaultFile) -> Result<Option<LinkCache>, VaultError> {
        let path = self.root.join(&file.path);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(extract_links(&content))),
            Err(e) => {
                warn!(path = %file.path, error = %e, "skipping unreadable document");
                Ok(None)
            }
        }
    }

    fn root_folder(&self) -> Result<FolderNode, VaultError> {
        Ok(build_folder_tree(self.folders.iter().map(String::as_str), &self.files))
    }
}

fn to_vault_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Check if an entry should be left out of the vault listing.
fn is_excluded(entry: &walkdir::DirEntry, root: &Path, excluded_folders: &[PathBuf]) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();

    // Hidden entries hold host state (.obsidian, .git, .trash, .linkaudit)
    if name.starts_with('.') {
        return true;
    }

    if !excluded_folders.is_empty()
        && let Ok(relative) = entry.path().strip_prefix(root)
    {
        return excluded_folders.iter().any(|excluded| relative.starts_with(excluded));
    }

    false
}
