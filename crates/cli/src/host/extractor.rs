//! Link and embed extraction from markdown text.
//!
//! Produces the per-document link metadata the audit core consumes. Targets
//! are the file part of the link: aliases, headings and block references are
//! dropped, and local markdown links are percent-decoded.

use std::borrow::Cow;
use std::sync::LazyLock;

use linkaudit_core::vault::{LinkCache, LinkRecord};
use regex::Regex;

static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // [[target]], [[target|alias]], [[target#section]], and the ! embed forms
    Regex::new(r"(!?)\[\[([^\]]+)\]\]").unwrap()
});

static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // [text](url) and ![alt](url)
    Regex::new(r"(!?)\[([^\]]*)\]\(([^)]+)\)").unwrap()
});

/// An open code fence: its marker character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: u8,
    len: usize,
}

/// Extract wikilinks, embeds and local markdown links from `content`.
///
/// Fenced code blocks and inline code spans are skipped.
pub fn extract_links(content: &str) -> LinkCache {
    let mut cache = LinkCache::default();
    let mut fence: Option<Fence> = None;

    for line in content.lines() {
        if let Some(open) = fence {
            if closes_fence(line, open) {
                fence = None;
            }
            continue;
        }
        if let Some(open) = opening_fence(line) {
            fence = Some(open);
            continue;
        }

        let line = strip_code_spans(line);

        for cap in WIKILINK_RE.captures_iter(&line) {
            let embed = !cap[1].is_empty();
            if let Some(target) = wikilink_target(&cap[2]) {
                push(&mut cache, embed, target);
            }
        }

        for cap in MARKDOWN_LINK_RE.captures_iter(&line) {
            let embed = !cap[1].is_empty();
            if let Some(target) = markdown_target(&cap[3]) {
                push(&mut cache, embed, target);
            }
        }
    }

    cache
}

/// Leading run of three or more backticks or tildes, and the text after it.
fn fence_run(line: &str) -> Option<(Fence, &str)> {
    let trimmed = line.trim_start();
    let marker = *trimmed.as_bytes().first()?;
    if marker != b'`' && marker != b'~' {
        return None;
    }
    let len = trimmed.bytes().take_while(|&b| b == marker).count();
    (len >= 3).then(|| (Fence { marker, len }, &trimmed[len..]))
}

fn opening_fence(line: &str) -> Option<Fence> {
    let (fence, info) = fence_run(line)?;
    // A backtick info string cannot hold backticks; such a line is inline code
    if fence.marker == b'`' && info.contains('`') {
        return None;
    }
    Some(fence)
}

fn closes_fence(line: &str, open: Fence) -> bool {
    matches!(
        fence_run(line),
        Some((run, rest)) if run.marker == open.marker && run.len >= open.len && rest.trim().is_empty()
    )
}

/// Remove inline code spans. A run of backticks is closed only by a run of
/// the same length; an unmatched run is kept as literal text.
fn strip_code_spans(line: &str) -> Cow<'_, str> {
    if !line.contains('`') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('`') {
        out.push_str(&rest[..start]);
        let run = backtick_run(&rest[start..]);
        let after = &rest[start + run..];
        match closing_run(after, run) {
            Some(end) => rest = &after[end..],
            None => {
                out.push_str(&rest[start..start + run]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn backtick_run(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b'`').count()
}

/// Byte offset just past the first backtick run of exactly `len` in `s`.
fn closing_run(s: &str, len: usize) -> Option<usize> {
    let mut pos = 0;
    while let Some(offset) = s[pos..].find('`') {
        let start = pos + offset;
        let run = backtick_run(&s[start..]);
        if run == len {
            return Some(start + run);
        }
        pos = start + run;
    }
    None
}

fn push(cache: &mut LinkCache, embed: bool, target: String) {
    let record = LinkRecord::new(target);
    if embed {
        cache.embeds.push(record);
    } else {
        cache.links.push(record);
    }
}

fn wikilink_target(inner: &str) -> Option<String> {
    let left = inner.split('|').next().unwrap_or(inner);
    let target = strip_subpath(left);
    (!target.trim().is_empty()).then(|| target.to_string())
}

fn markdown_target(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let url = match raw.strip_prefix('<') {
        Some(rest) => rest.split('>').next().unwrap_or(rest),
        // Drop an optional "title" after the destination
        None => raw.split_whitespace().next().unwrap_or(raw),
    };

    if is_external(url) {
        return None;
    }

    let target = strip_subpath(url);
    let target = target.strip_prefix("./").unwrap_or(target);
    if target.is_empty() {
        return None;
    }
    // Malformed or non-UTF-8 escapes leave the target as written
    let decoded = urlencoding::decode(target).unwrap_or(Cow::Borrowed(target));
    Some(decoded.into_owned())
}

fn strip_subpath(target: &str) -> &str {
    target.split('#').next().unwrap_or(target)
}

fn is_external(url: &str) -> bool {
    url.contains("://") || url.starts_with("mailto:") || url.starts_with("obsidian:")
}
