use crate::checks::CheckResult;
use crate::config::ConventionConfig;
use crate::manifest::Manifest;
use crate::module;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static VERSION_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap());

/// Strict x.y.z format, anchored at both ends.
pub fn is_valid_version(version: &str) -> bool {
    VERSION_FORMAT.is_match(version)
}

fn parent_dir_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

pub fn check(config: &ConventionConfig, files: &[PathBuf]) -> CheckResult {
    let mut result = CheckResult::new("Manifest version format");

    for file in files {
        if file.file_name().and_then(|n| n.to_str()) != Some(config.manifest_filename.as_str()) {
            continue;
        }
        if !module::is_family_module(file, &config.family_prefix) {
            result.notes.push(format!(
                "Skipping non-{} module: {}",
                config.family_label(),
                parent_dir_name(file),
            ));
            continue;
        }

        match Manifest::from_path(file) {
            Ok(manifest) => {
                let version = manifest.version();
                if !is_valid_version(version) {
                    result.violations.push(format!(
                        "{}: version '{}' is not in format x.y.z",
                        file.display(),
                        version,
                    ));
                }
            }
            Err(e) => {
                let message =
                    format!("{}: failed to parse manifest: {}", file.display(), e);
                if config.fail_on_manifest_parse_error {
                    result.violations.push(message);
                } else {
                    result.warnings.push(message);
                }
            }
        }
    }

    result.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_component_numeric_versions_are_valid() {
        assert!(is_valid_version("1.2.3"));
        assert!(is_valid_version("0.0.0"));
        assert!(is_valid_version("17.10.204"));
    }

    #[test]
    fn other_shapes_are_invalid() {
        assert!(!is_valid_version("1.2"));
        assert!(!is_valid_version("1.2.3.4"));
        assert!(!is_valid_version("a.b.c"));
        assert!(!is_valid_version("1.2.x"));
        assert!(!is_valid_version(""));
        assert!(!is_valid_version("1.2.3 "));
        assert!(!is_valid_version("v1.2.3"));
    }
}
