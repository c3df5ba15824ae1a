//! Rules directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the rule tables directory.
pub const RULES_ENV_VAR: &str = "REPORT_CHECKER_RULES_DIR";

/// Rules directory requested through the environment, if any.
///
/// `None` means the embedded tables should be used.
pub fn rules_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(RULES_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Directory holding the default Russian tables in the source tree.
pub fn bundled_rules_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("ru")
}
