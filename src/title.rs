//! Document title detection.

/// True if any line is a level-0 heading (`= Title`).
///
/// Section headings (`== ...`) do not count.
pub fn has_title(lines: &[String]) -> bool {
    lines.iter().any(|line| line.trim().starts_with("= "))
}
