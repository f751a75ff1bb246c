//! Deprecated attribute renames.

use crate::config::Config;

const DEPRECATED_MODULE_TYPE: &str = ":system-module-type:";
const MODULE_TYPE: &str = ":_module-type:";

/// Result of [`normalize`].
#[derive(Debug)]
pub struct Normalized {
    pub lines: Vec<String>,
    /// Lines containing the deprecated attribute.
    pub changed: usize,
}

/// Rename `:system-module-type:` to `:_module-type:` on every line.
pub fn normalize(lines: Vec<String>, config: &Config) -> Normalized {
    let mut changed = 0;
    let lines = lines
        .into_iter()
        .map(|line| {
            if !line.contains(DEPRECATED_MODULE_TYPE) {
                return line;
            }
            changed += 1;
            if config.dry_run {
                line
            } else {
                line.replace(DEPRECATED_MODULE_TYPE, MODULE_TYPE)
            }
        })
        .collect();
    Normalized { lines, changed }
}
