//! Folder enumeration and empty-folder detection.

use std::collections::BTreeSet;

use crate::vault::{FolderNode, VaultFile};

/// Folders with no children of any kind, sorted ascending.
///
/// A folder that only holds empty subfolders is not itself empty; its empty
/// descendants are reported instead. The tree is walked depth-first,
/// pre-order, with an explicit stack so depth is not bounded by the call
/// stack.
pub fn empty_folders(root: &FolderNode) -> Vec<String> {
    let mut empty = Vec::new();
    let mut stack = vec![root];

    while let Some(folder) = stack.pop() {
        if !folder.has_files() && !folder.has_subfolders() {
            empty.push(folder.path.clone());
        }

        // Reverse so the first child is visited next.
        let children: Vec<&FolderNode> = folder.subfolders().collect();
        stack.extend(children.into_iter().rev());
    }

    empty.sort();
    empty
}

/// Distinct folders that directly contain at least one file, sorted.
pub fn folder_paths(files: &[VaultFile]) -> Vec<String> {
    let set: BTreeSet<&str> = files.iter().filter_map(VaultFile::parent).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Every folder implied by any file path, including intermediate ones, sorted.
pub fn all_folder_paths(files: &[VaultFile]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for file in files {
        let mut current = file.parent();
        while let Some(folder) = current {
            if !set.insert(folder) {
                break;
            }
            current = folder.rfind('/').map(|idx| &folder[..idx]);
        }
    }
    set.into_iter().map(str::to_string).collect()
}
