//! Run configuration — marker texts and the dry-run switch.
//!
//! Built once from the command line and handed to every pipeline stage.

/// Naming convention for the inserted role markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// `[role="_abstract"]` / `[role="_additional-resources"]`
    #[default]
    Standard,
    /// `[role="system__abstract"]` / `[role="system__additional-resources"]`
    Alternate,
}

impl MarkerStyle {
    pub fn abstract_tag(self) -> &'static str {
        match self {
            MarkerStyle::Standard => r#"[role="_abstract"]"#,
            MarkerStyle::Alternate => r#"[role="system__abstract"]"#,
        }
    }

    pub fn resource_tag(self) -> &'static str {
        match self {
            MarkerStyle::Standard => r#"[role="_additional-resources"]"#,
            MarkerStyle::Alternate => r#"[role="system__additional-resources"]"#,
        }
    }
}

/// Settings shared by all stages of a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub abstract_tag: &'static str,
    pub resource_tag: &'static str,
    /// Detect and report, but never modify a document.
    pub dry_run: bool,
}

impl Config {
    pub fn new(style: MarkerStyle, dry_run: bool) -> Self {
        Config {
            abstract_tag: style.abstract_tag(),
            resource_tag: style.resource_tag(),
            dry_run,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(MarkerStyle::Standard, false)
    }
}

/// Build a marker line that reuses the line ending of `next`, the line it is
/// inserted in front of.
pub fn marker_line(tag: &str, next: &str) -> String {
    if next.ends_with("\r\n") {
        format!("{tag}\r\n")
    } else {
        format!("{tag}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_markers() {
        let config = Config::new(MarkerStyle::Standard, false);
        assert_eq!(config.abstract_tag, "[role=\"_abstract\"]");
        assert_eq!(config.resource_tag, "[role=\"_additional-resources\"]");
        assert!(!config.dry_run);
    }

    #[test]
    fn alternate_markers() {
        let config = Config::new(MarkerStyle::Alternate, true);
        assert_eq!(config.abstract_tag, "[role=\"system__abstract\"]");
        assert_eq!(
            config.resource_tag,
            "[role=\"system__additional-resources\"]"
        );
        assert!(config.dry_run);
    }

    #[test]
    fn marker_line_follows_next_line_ending() {
        assert_eq!(marker_line("[x]", "text\n"), "[x]\n");
        assert_eq!(marker_line("[x]", "text\r\n"), "[x]\r\n");
        // Unterminated last line still gets a newline after the marker
        assert_eq!(marker_line("[x]", "text"), "[x]\n");
    }
}
