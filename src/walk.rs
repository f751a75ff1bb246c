//! Document discovery.
//!
//! Recursively lists directories and `.adoc` files below a root. Hidden
//! directories are pruned and the `master.adoc` aggregator is never
//! selected. Within a directory, files come before subdirectories and both
//! are sorted by name, so output order is stable across runs.

use anyhow::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extension of document sources.
pub const DOCUMENT_EXTENSION: &str = "adoc";

/// Assembly-of-assemblies file that is never checked.
pub const AGGREGATOR_FILE: &str = "master.adoc";

/// Something the walk yields, in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(PathBuf),
    Document(PathBuf),
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Regular files, and symlinks that resolve to a regular file.
fn is_document(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    (file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()))
        && entry.path().extension().and_then(|e| e.to_str()) == Some(DOCUMENT_EXTENSION)
        && entry.file_name() != AGGREGATOR_FILE
}

/// Files first, then directories, each group by name.
fn visit_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk `root`, yielding each visited directory followed by its documents.
///
/// The root itself is always visited, even if its name starts with `.`.
pub fn entries(root: &Path) -> impl Iterator<Item = Result<Entry>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(visit_order)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() > 0 && is_hidden_dir(entry) {
                tracing::trace!(path = %entry.path().display(), "skipping hidden directory");
                return false;
            }
            true
        })
        .filter_map(|res| match res {
            Err(err) => Some(Err(
                anyhow::Error::new(err).context("Failed to walk directory tree"),
            )),
            Ok(entry) if entry.file_type().is_dir() => {
                Some(Ok(Entry::Directory(entry.into_path())))
            }
            Ok(entry) if is_document(&entry) => Some(Ok(Entry::Document(entry.into_path()))),
            Ok(_) => None,
        })
}

/// Render `dir` relative to `root` as `.` or `./sub/dir`.
pub fn display_dir(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => format!("./{}", rel.display()),
        Err(_) => dir.display().to_string(),
    }
}
