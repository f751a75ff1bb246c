//! Per-document pipeline: title check, abstract tagging, resources tagging,
//! attribute renames, then write back in place.

use crate::abstracts::{self, Verdict};
use crate::attributes;
use crate::config::Config;
use crate::resources;
use crate::title;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Everything the run report needs to know about one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings {
    pub has_title: bool,
    pub abstract_verdict: Verdict,
    /// Resources headings that lacked their tag.
    pub resource_tags: usize,
    /// Lines carrying the deprecated module type attribute.
    pub renamed_attributes: usize,
    /// Whether the output differs from the input.
    pub changed: bool,
}

/// Split file content into lines, each keeping its own line ending.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

/// Run every stage over a document's lines, in order.
pub fn process_lines(lines: Vec<String>, config: &Config) -> (Vec<String>, Findings) {
    let original_len = lines.len();
    let has_title = title::has_title(&lines);

    let classified = abstracts::classify(lines, config);
    let tagged = resources::insert_markers(classified.lines, config);
    let normalized = attributes::normalize(tagged.lines, config);

    let changed = !config.dry_run
        && (normalized.lines.len() != original_len || normalized.changed > 0);

    let findings = Findings {
        has_title,
        abstract_verdict: classified.verdict,
        resource_tags: tagged.inserted,
        renamed_attributes: normalized.changed,
        changed,
    };
    (normalized.lines, findings)
}

/// Check one file and rewrite it in place unless running dry.
pub fn process_file(path: &Path, config: &Config) -> Result<Findings> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let (lines, findings) = process_lines(split_lines(&content), config);
    tracing::debug!(
        path = %path.display(),
        has_title = findings.has_title,
        abstract_verdict = ?findings.abstract_verdict,
        resource_tags = findings.resource_tags,
        renamed_attributes = findings.renamed_attributes,
        "checked document"
    );

    if !config.dry_run {
        fs::write(path, lines.concat())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if findings.changed {
            tracing::info!(path = %path.display(), "updated document");
        }
    }

    Ok(findings)
}
