use linkaudit_core::audit::{LinkAudit, find_orphans};
use linkaudit_core::vault::{VaultFile, VaultSnapshot};
use linkaudit_core::{AuditError, Settings};

fn docs_vault() -> VaultSnapshot {
    VaultSnapshot::new()
        .file("Docs/A.md")
        .file("Docs/B.md")
        .file("Docs/Tasks.md")
        .folder("Docs/Sub")
        .links("Index.md", ["A"])
}

fn paths(files: &[VaultFile]) -> Vec<&str> {
    files.iter().map(|f| f.path.as_str()).collect()
}

#[test]
fn audits_docs_folder() {
    let vault = docs_vault();
    let audit = LinkAudit::new(&vault, Settings::default());

    let result = audit.orphan_files("Docs", None).expect("audit ok");

    assert_eq!(paths(&result.orphan_files), vec!["Docs/B.md"]);
    assert!(result.referenced_files.is_empty());
    assert_eq!(result.total_analyzed, 2);
}

#[test]
fn reports_empty_subfolder() {
    let vault = docs_vault();
    let audit = LinkAudit::new(&vault, Settings::default());

    let report = audit.empty_folders().expect("walk ok");

    assert!(report.empty_folders.contains(&"Docs/Sub".to_string()));
    assert!(!report.empty_folders.contains(&"Docs".to_string()));
    assert_eq!(report.all_folders, vec!["Docs"]);
}

#[test]
fn tasks_file_is_neither_candidate_nor_source() {
    let vault = VaultSnapshot::new()
        .file("Docs/Target.md")
        .links("Docs/Tasks.md", ["Target"])
        .links("Elsewhere/Tasks.md", ["Tasks"]);

    let result = find_orphans(&vault, "Docs", &Settings::default(), None).unwrap();

    assert_eq!(paths(&result.orphan_files), vec!["Docs/Target.md"]);
    assert_eq!(result.total_analyzed, 1);
}

#[test]
fn show_referenced_never_changes_orphans_or_total() {
    let vault = VaultSnapshot::new()
        .file("Notes/one.md")
        .file("Notes/two.md")
        .file("Notes/img/three.png")
        .file("Notes/four.md")
        .links("Index.md", ["Notes/two", "three.png"])
        .embeds("Index.md", ["Notes/four.md"]);

    let off = find_orphans(&vault, "Notes", &Settings { show_referenced: false }, None).unwrap();
    let on = find_orphans(&vault, "Notes", &Settings { show_referenced: true }, None).unwrap();

    assert_eq!(off.orphan_files, on.orphan_files);
    assert_eq!(off.total_analyzed, on.total_analyzed);
    assert!(off.referenced_files.is_empty());
    assert_eq!(
        paths(&on.referenced_files),
        vec!["Notes/two.md", "Notes/img/three.png", "Notes/four.md"]
    );
    assert_eq!(on.total_analyzed, on.orphan_files.len() + on.referenced_files.len());
}

#[test]
fn repeated_runs_are_identical() {
    let vault = docs_vault();
    let settings = Settings { show_referenced: true };

    let first = find_orphans(&vault, "Docs", &settings, None).unwrap();
    let second = find_orphans(&vault, "Docs", &settings, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn near_miss_links_do_not_count() {
    let vault = VaultSnapshot::new()
        .file("Notes/Foo.md")
        .links("Index.md", ["foo", "Notes/Foo.markdown", "Foo ", "Notes/Foo#Intro", "Foo|alias"]);

    let result = find_orphans(&vault, "Notes", &Settings::default(), None).unwrap();

    // "Foo " is trimmed on indexing and so does match.
    assert!(result.orphan_files.is_empty());

    let vault = VaultSnapshot::new()
        .file("Notes/Foo.md")
        .links("Index.md", ["foo", "Notes/Foo.markdown", "Notes/Foo#Intro", "Foo|alias"]);
    let result = find_orphans(&vault, "Notes", &Settings::default(), None).unwrap();
    assert_eq!(paths(&result.orphan_files), vec!["Notes/Foo.md"]);
}

#[test]
fn folder_listing_is_sorted_and_distinct() {
    let vault = VaultSnapshot::new().file("X/Y/f.md").file("X/g.md");
    let audit = LinkAudit::new(&vault, Settings::default());

    assert_eq!(audit.folder_paths().unwrap(), vec!["X", "X/Y"]);
    assert_eq!(audit.empty_folders().unwrap().all_folders, vec!["X", "X/Y"]);
}

#[test]
fn missing_folder_is_a_usage_error() {
    let vault = docs_vault();
    let audit = LinkAudit::new(&vault, Settings::default());

    let err = audit.orphan_files("", None).unwrap_err();
    assert!(matches!(err, AuditError::NoFolderSelected));
}

#[test]
fn settings_can_be_swapped_between_runs() {
    let vault = docs_vault();
    let mut audit = LinkAudit::new(&vault, Settings::default());
    assert!(audit.orphan_files("Docs", None).unwrap().referenced_files.is_empty());

    audit.set_settings(Settings { show_referenced: true });
    let result = audit.orphan_files("Docs", None).unwrap();
    assert_eq!(paths(&result.referenced_files), vec!["Docs/A.md"]);
}
