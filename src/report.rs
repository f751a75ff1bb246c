//! Run report — documents missing a title or an abstract.

use crate::document::Findings;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Findings accumulated over a whole run, in discovery order.
#[derive(Debug, Default)]
pub struct Report {
    pub missing_title: Vec<PathBuf>,
    pub missing_abstract: Vec<PathBuf>,
    pub checked: usize,
    pub changed: usize,
    /// Resources tags inserted (or due, in dry-run) across all documents.
    pub resource_tags: usize,
    /// Lines carrying the deprecated module type attribute.
    pub renamed_attributes: usize,
}

impl Report {
    /// Fold one document's findings into the report.
    pub fn record(&mut self, path: &Path, findings: &Findings) {
        self.checked += 1;
        self.resource_tags += findings.resource_tags;
        self.renamed_attributes += findings.renamed_attributes;
        if findings.changed {
            self.changed += 1;
        }
        if !findings.has_title {
            self.missing_title.push(path.to_path_buf());
        }
        if findings.abstract_verdict.is_missing() {
            self.missing_abstract.push(path.to_path_buf());
        }
    }

    /// Write the end-of-run summary.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Run complete.")?;
        writeln!(out)?;
        render_list(out, "Files missing a title:", &self.missing_title)?;
        render_list(out, "Files missing an abstract:", &self.missing_abstract)
    }
}

fn render_list(out: &mut impl Write, heading: &str, paths: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    for path in paths {
        writeln!(out, "    {}", path.display())?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {}", paths.len())?;
    writeln!(out)
}
