//! Additional resources tagging.
//!
//! Every `.Additional resources` block title and `== Additional resources`
//! section heading must be preceded by the resources role tag.

use crate::config::{marker_line, Config};
use regex::Regex;
use std::sync::LazyLock;

/// Block title form, matched on the trimmed line.
static RE_BLOCK_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.Additional resources").unwrap());
/// Section heading form, matched at column zero.
static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^== Additional resources").unwrap());

/// Returns true if the line opens an "Additional resources" section.
pub fn is_resources_heading(line: &str) -> bool {
    RE_BLOCK_TITLE.is_match(line.trim()) || RE_SECTION.is_match(line)
}

/// Result of [`insert_markers`].
#[derive(Debug)]
pub struct Tagged {
    pub lines: Vec<String>,
    /// Headings that lacked the tag (inserted unless dry-run).
    pub inserted: usize,
}

/// Insert the resources tag in front of each untagged heading.
///
/// Headings on the first two lines are left alone. Each heading is checked
/// against the line directly above it in the input.
pub fn insert_markers(lines: Vec<String>, config: &Config) -> Tagged {
    let mut processed = Vec::with_capacity(lines.len());
    let mut inserted = 0;

    for (idx, line) in lines.iter().enumerate() {
        if idx > 1
            && is_resources_heading(line)
            && lines[idx - 1].trim() != config.resource_tag
        {
            inserted += 1;
            if !config.dry_run {
                processed.push(marker_line(config.resource_tag, line));
            }
        }
        processed.push(line.clone());
    }

    Tagged {
        lines: processed,
        inserted,
    }
}
