#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, RulesError};
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile, Pins};
use crate::table::RuleTable;

const MANIFEST_FILE: &str = "manifest.toml";

const MANIFEST_SCHEMA: &str = "report-checker.rules-manifest";

const REQUIRED_ROLES: &[&str] = &["task_types", "unification", "phrases"];

const ALLOWED_KINDS: &[&str] = &["csv", "toml", "other"];

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub rules_dir: PathBuf,
    pub manifest_pins: Pins,
    pub file_count: usize,
    pub category_count: usize,
    pub variant_count: usize,
    pub unified_count: usize,
    pub token_ratio: f64,
}

impl RuleTable {
    /// Verify a rules directory against its manifest and load the table.
    ///
    /// Every listed file must exist and match its pinned sha256; CSV files
    /// not listed in the manifest are rejected.
    pub fn verify_and_load(rules_dir: &Path) -> Result<(Self, VerifySummary)> {
        let manifest = load_manifest(&rules_dir.join(MANIFEST_FILE))?;

        validate_manifest(&manifest, rules_dir)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        for file in &files {
            verify_file(rules_dir, file)?;
        }

        let task_types = read_role(rules_dir, &files, "task_types")?;
        let unification = read_role(rules_dir, &files, "unification")?;
        let phrases = read_role(rules_dir, &files, "phrases")?;

        let mut table = RuleTable::from_csv(
            manifest.pins.clone(),
            &task_types,
            &unification,
            &phrases,
        )?;
        if let Some(ratio) = manifest.token_ratio() {
            table = table.with_token_ratio(ratio)?;
        }

        let unified_count = table
            .categories()
            .filter(|(name, _)| table.canonicalize(name) != *name)
            .count();

        let summary = VerifySummary {
            rules_dir: rules_dir.to_path_buf(),
            manifest_pins: manifest.pins.clone(),
            file_count: files.len(),
            category_count: table.category_count(),
            variant_count: table.variant_count(),
            unified_count,
            token_ratio: table.token_ratio(),
        };

        tracing::debug!(
            rules_dir = %rules_dir.display(),
            locale = %summary.manifest_pins.locale,
            version = %summary.manifest_pins.version,
            categories = summary.category_count,
            "rule tables verified"
        );

        Ok((table, summary))
    }
}

/// Load the table from `rules_dir` when given, otherwise the embedded tables.
pub fn load_rule_table(rules_dir: Option<&Path>) -> Result<RuleTable> {
    match rules_dir {
        Some(dir) => RuleTable::verify_and_load(dir).map(|(table, _)| table),
        None => RuleTable::embedded(),
    }
}

fn load_manifest(path: &Path) -> Result<Manifest> {
    let contents = std::fs::read_to_string(path).map_err(|e| RulesError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| RulesError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest, rules_dir: &Path) -> Result<()> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(RulesError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(RulesError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }
    if manifest.pins.locale.trim().is_empty() {
        return Err(RulesError::InvalidManifest {
            message: "pins.locale must not be empty".to_string(),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    let mut manifest_paths: BTreeSet<PathBuf> = BTreeSet::new();

    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(RulesError::DuplicateRole {
                role: file.role.clone(),
            });
        }

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(RulesError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;

        let path = validate_path(&file.path)?;
        manifest_paths.insert(normalize_path(&path));
    }

    for role in REQUIRED_ROLES {
        if !roles.contains(role) {
            return Err(RulesError::MissingRole {
                role: role.to_string(),
            });
        }
    }

    for path in list_csv_files(rules_dir)? {
        if !manifest_paths.contains(&normalize_path(&path)) {
            return Err(RulesError::UnexpectedFile {
                path: rules_dir.join(path),
            });
        }
    }

    Ok(())
}

fn verify_file(rules_dir: &Path, file: &ManifestFile) -> Result<()> {
    let full_path = rules_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RulesError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            RulesError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(RulesError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

fn read_role(rules_dir: &Path, files: &[ManifestFile], role: &str) -> Result<String> {
    let file = files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| RulesError::MissingRole {
            role: role.to_string(),
        })?;
    let path = rules_dir.join(&file.path);
    std::fs::read_to_string(&path).map_err(|e| RulesError::io(path, e))
}

fn validate_sha(sha: &str, path: &str) -> Result<()> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RulesError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf> {
    if path.contains('\\') {
        return Err(RulesError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(RulesError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(RulesError::InvalidPath {
            path: p,
            message: "manifest path must not traverse out of the rules directory".to_string(),
        });
    }

    Ok(p)
}

fn list_csv_files(root: &Path) -> Result<BTreeSet<PathBuf>> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| RulesError::io(&dir, e))? {
            let entry = entry.map_err(|e| RulesError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().is_some_and(|ext| ext == "csv") {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| RulesError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }

    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::CurDir => {}
            _ => out.push(c.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DEFAULT_TOKEN_RATIO;

    #[test]
    fn rejects_parent_traversal() {
        assert!(validate_path("../secrets.csv").is_err());
        assert!(validate_path("nested\\file.csv").is_err());
        assert!(validate_path("./task_types.csv").is_ok());
    }

    #[test]
    fn rejects_short_sha() {
        assert!(validate_sha("abc", "task_types.csv").is_err());
    }

    #[test]
    fn default_ratio_matches_table_default() {
        assert_eq!(RuleTable::embedded().unwrap().token_ratio(), DEFAULT_TOKEN_RATIO);
    }
}
