//! Abstract detection and tagging.
//!
//! Walks a document from the top, skipping preamble (blank lines, comments,
//! attributes, block delimiters, anchors, directives), and stops at the first
//! line of real content:
//!
//! - if that line opens a list, table, block title or include, the document
//!   has no usable abstract and is reported;
//! - otherwise the line starts the abstract and the abstract tag is inserted
//!   right before it.
//!
//! Documents that already carry the tag anywhere are returned untouched.

use crate::config::{marker_line, Config};
use regex::Regex;
use std::sync::LazyLock;

/// Trimmed lines that may appear ahead of the abstract.
static RE_PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:$|#|/|\[|=|ifdef|ifndef|assembly_|toc|include|:)").unwrap()
});
/// Trimmed lines that cannot open an abstract: tables, list items, includes,
/// block titles.
static RE_BLOCKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\||\*|include|\.)").unwrap());

/// How a single line is treated while looking for the abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Metadata or structure; keep scanning.
    Preamble,
    /// First content line, but not something an abstract can start with.
    Blocked,
    /// First content line, and a plausible abstract.
    Opener,
}

/// Classify one line. Leading and trailing whitespace is ignored.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if RE_PREAMBLE.is_match(trimmed) {
        LineKind::Preamble
    } else if RE_BLOCKED.is_match(trimmed) {
        LineKind::Blocked
    } else {
        LineKind::Opener
    }
}

/// What the classifier concluded about a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The abstract tag was already there.
    AlreadyPresent,
    /// An opener was found and tagged (or would have been, in dry-run).
    Inserted,
    /// The first content line cannot be an abstract.
    Missing,
    /// Empty or preamble-only document; no decision was reached.
    Undecided,
}

impl Verdict {
    /// Whether the document belongs on the missing-abstract list.
    pub fn is_missing(self) -> bool {
        self == Verdict::Missing
    }
}

/// Result of [`classify`].
#[derive(Debug)]
pub struct Classified {
    pub lines: Vec<String>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Scanning,
    Decided(Verdict),
}

/// Locate the abstract of a document and tag it if needed.
///
/// The first decision wins: once a content line has been seen, every later
/// line is copied through as-is. Dry-run reaches the same verdict but leaves
/// the lines unchanged.
pub fn classify(lines: Vec<String>, config: &Config) -> Classified {
    if lines.iter().any(|line| line.contains(config.abstract_tag)) {
        return Classified {
            lines,
            verdict: Verdict::AlreadyPresent,
        };
    }

    let mut processed = Vec::with_capacity(lines.len() + 1);
    let mut state = ScanState::Scanning;

    for line in lines {
        if let ScanState::Scanning = state {
            match classify_line(&line) {
                LineKind::Preamble => {}
                LineKind::Blocked => state = ScanState::Decided(Verdict::Missing),
                LineKind::Opener => {
                    if !config.dry_run {
                        processed.push(marker_line(config.abstract_tag, &line));
                    }
                    state = ScanState::Decided(Verdict::Inserted);
                }
            }
        }
        processed.push(line);
    }

    let verdict = match state {
        ScanState::Scanning => Verdict::Undecided,
        ScanState::Decided(verdict) => verdict,
    };
    Classified {
        lines: processed,
        verdict,
    }
}
