//! Folder tree assembly from flat path listings.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::types::{FolderNode, TreeNode, VaultFile};

/// Build a folder tree from explicit folder paths plus the folders implied by
/// file paths.
///
/// Child folders come first in path order, followed by files in the order
/// they appear in `files`.
pub fn build_folder_tree<'a>(
    folders: impl IntoIterator<Item = &'a str>,
    files: &[VaultFile],
) -> FolderNode {
    let mut all = BTreeSet::new();
    for folder in folders {
        insert_with_ancestors(folder.trim_matches('/'), &mut all);
    }
    for file in files {
        if let Some(parent) = file.parent() {
            insert_with_ancestors(parent, &mut all);
        }
    }

    let mut subfolders: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for folder in &all {
        subfolders.entry(parent_of(folder)).or_default().push(folder.as_str());
    }

    let mut file_children: HashMap<&str, Vec<&VaultFile>> = HashMap::new();
    for file in files {
        file_children.entry(file.parent().unwrap_or("")).or_default().push(file);
    }

    let mut root = assemble("", &subfolders, &file_children);
    root.path = FolderNode::ROOT_PATH.to_string();
    root
}

fn insert_with_ancestors(path: &str, out: &mut BTreeSet<String>) {
    let mut current = path;
    while !current.is_empty() {
        if !out.insert(current.to_string()) {
            break;
        }
        current = parent_of(current);
    }
}

fn parent_of(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}

fn assemble(
    path: &str,
    subfolders: &BTreeMap<&str, Vec<&str>>,
    file_children: &HashMap<&str, Vec<&VaultFile>>,
) -> FolderNode {
    let mut node = FolderNode::new(path);

    for child in subfolders.get(path).into_iter().flatten() {
        node.children.push(TreeNode::Folder(assemble(child, subfolders, file_children)));
    }
    for file in file_children.get(path).into_iter().flatten() {
        node.children.push(TreeNode::File((*file).clone()));
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<VaultFile> {
        paths.iter().map(|p| VaultFile::from_path(*p)).collect()
    }

    #[test]
    fn test_root_holds_top_level_entries() {
        let tree = build_folder_tree([], &files(&["Index.md", "Docs/A.md"]));

        assert_eq!(tree.path, "/");
        assert_eq!(tree.children.len(), 2);
        assert!(matches!(&tree.children[0], TreeNode::Folder(f) if f.path == "Docs"));
        assert!(matches!(&tree.children[1], TreeNode::File(f) if f.path == "Index.md"));
    }

    #[test]
    fn test_explicit_folders_create_ancestors() {
        let tree = build_folder_tree(["A/B/C/"], &[]);

        let a = tree.subfolders().next().unwrap();
        assert_eq!(a.path, "A");
        let b = a.subfolders().next().unwrap();
        assert_eq!(b.path, "A/B");
        let c = b.subfolders().next().unwrap();
        assert_eq!(c.path, "A/B/C");
        assert!(c.children.is_empty());
    }

    #[test]
    fn test_files_keep_enumeration_order() {
        let tree = build_folder_tree([], &files(&["D/z.md", "D/a.md"]));
        let d = tree.subfolders().next().unwrap();

        let names: Vec<_> = d
            .children
            .iter()
            .map(|c| match c {
                TreeNode::File(f) => f.name.as_str(),
                TreeNode::Folder(f) => f.path.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["z.md", "a.md"]);
    }
}
