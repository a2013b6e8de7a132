use crate::checks::CheckResult;
use crate::config::ConventionConfig;
use crate::module;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static FIELD_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*fields\.").unwrap()
});

static INHERIT_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"_inherit\s*=\s*['"]"#).unwrap());

/// Whether the file extends an existing model rather than defining a new
/// one. Only inherited models are subject to the field prefix rule.
pub fn inherits_existing_model(content: &str) -> bool {
    content.lines().any(|line| INHERIT_DECL.is_match(line))
}

/// Scan one source file's content for unprefixed field declarations.
pub fn scan_file(config: &ConventionConfig, path: &Path, content: &str) -> Vec<String> {
    if !module::is_family_module(path, &config.family_prefix) {
        return Vec::new();
    }
    if !inherits_existing_model(content) {
        return Vec::new();
    }

    let prefix_lower = config.family_prefix.to_ascii_lowercase();
    let mut violations = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.contains(&config.suppression_marker) {
            continue;
        }
        let Some(caps) = FIELD_ASSIGN.captures(line) else {
            continue;
        };
        let field_name = &caps[1];
        if field_name.starts_with('_') {
            continue; // internal fields
        }
        if config.is_allowed_unprefixed(field_name) {
            continue;
        }
        if !field_name.to_ascii_lowercase().starts_with(&prefix_lower) {
            violations.push(format!(
                "{}:{} - field '{}' must start with '{}' (or add {})",
                path.display(),
                i + 1,
                field_name,
                config.family_prefix,
                config.suppression_marker,
            ));
        }
    }

    violations
}

pub fn check(config: &ConventionConfig, files: &[PathBuf]) -> CheckResult {
    let mut result = CheckResult::new("Field prefix");

    for file in files {
        if file.extension().and_then(|e| e.to_str()) != Some("py") {
            continue;
        }
        let content = match fs::read_to_string(file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        result.violations.extend(scan_file(config, file, &content));
    }

    result.finish()
}
