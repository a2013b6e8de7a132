use crate::checks::CheckResult;
use crate::config::ConventionConfig;
use crate::manifest::Manifest;
use crate::module;
use std::path::{Path, PathBuf};

fn parent_dir_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

pub fn check(config: &ConventionConfig, files: &[PathBuf]) -> CheckResult {
    let mut result = CheckResult::new("Manifest author");

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
                let author = manifest.author();
                if author != config.expected_author {
                    result.violations.push(format!(
                        "Invalid author in {}: '{}' (expected '{}')",
                        file.display(),
                        author,
                        config.expected_author,
                    ));
                }
            }
            Err(e) => {
                let message = format!("Failed to read {}: {}", file.display(), e);
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
