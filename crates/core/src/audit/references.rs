//! Aggregation of every outgoing link and embed target in the vault.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::exclusions::is_excluded;
use crate::vault::{VaultError, VaultSource};

/// Deduplicated, trimmed link targets from every indexed markdown document.
///
/// Membership is exact string equality. Whether a target came from a link or
/// an embed, and which document wrote it, is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    targets: HashSet<String>,
}

impl ReferenceSet {
    pub fn contains(&self, target: &str) -> bool {
        self.targets.contains(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }

    fn insert(&mut self, raw: &str) {
        self.targets.insert(raw.trim().to_string());
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for raw in iter {
            set.insert(raw.as_ref());
        }
        set
    }
}

/// Build the reference set from every markdown document in `vault`.
///
/// Excluded documents contribute nothing, and documents without cached
/// metadata are skipped. Targets are trimmed but otherwise kept verbatim.
pub fn build_reference_set<V: VaultSource + ?Sized>(
    vault: &V,
) -> Result<ReferenceSet, VaultError> {
    let mut set = ReferenceSet::default();
    let mut sources = 0usize;

    for file in vault.list_markdown_files()? {
        if is_excluded(&file) {
            trace!(path = %file.path, "skipping excluded link source");
            continue;
        }

        let Some(cache) = vault.link_cache(&file)? else {
            trace!(path = %file.path, "no cached metadata");
            continue;
        };

        sources += 1;
        for record in cache.links.iter().chain(cache.embeds.iter()) {
            set.insert(&record.target);
        }
    }

    debug!(sources, targets = set.len(), "built reference set");
    Ok(set)
}
