use std::fs;
use std::path::Path;

use module_lint::checks::{manifest_author, manifest_version};
use module_lint::config::ConventionConfig;

fn write_manifest(dir: &Path, module: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(module).join("__manifest__.py");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn valid_version_passes() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "e3k_sales",
        "{'name': 'Sales', 'version': '1.2.3', 'author': 'e3k'}",
    );

    let config = ConventionConfig::default();
    let result = manifest_version::check(&config, &[manifest]);

    assert!(result.passed);
    assert!(result.notes.is_empty());
}

#[test]
fn two_and_four_component_versions_fail() {
    let temp = tempfile::tempdir().unwrap();
    let short = write_manifest(temp.path(), "e3k_sales", "{'version': '1.2'}");
    let long = write_manifest(temp.path(), "e3k_stock", "{'version': '1.2.3.4'}");

    let config = ConventionConfig::default();
    let result = manifest_version::check(&config, &[short, long]);

    assert!(!result.passed);
    assert_eq!(result.violations.len(), 2);
    assert!(result.violations[0].contains("version '1.2' is not in format x.y.z"));
}

#[test]
fn missing_version_key_fails_as_empty_string() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(temp.path(), "e3k_sales", "{'name': 'Sales'}");

    let config = ConventionConfig::default();
    let result = manifest_version::check(&config, &[manifest]);

    assert!(!result.passed);
    assert!(result.violations[0].contains("version ''"));
}

#[test]
fn non_family_manifest_is_skipped_with_note() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(temp.path(), "vendor_sales", "{'version': 'bogus'}");

    let config = ConventionConfig::default();
    let version = manifest_version::check(&config, &[manifest.clone()]);
    let author = manifest_author::check(&config, &[manifest]);

    assert!(version.passed);
    assert_eq!(version.notes.len(), 1);
    assert!(version.notes[0].contains("Skipping non-e3k module: vendor_sales"));
    assert!(author.passed);
    assert_eq!(author.notes.len(), 1);
}

#[test]
fn other_filenames_are_not_considered() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("e3k_sales/setup.py");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{'version': 'bogus'}").unwrap();

    let config = ConventionConfig::default();
    let result = manifest_version::check(&config, &[path]);

    assert!(result.passed);
    assert!(result.notes.is_empty());
}

#[test]
fn expected_author_passes_and_any_other_fails() {
    let temp = tempfile::tempdir().unwrap();
    let good = write_manifest(temp.path(), "e3k_sales", "{'author': 'e3k'}");
    let bad = write_manifest(temp.path(), "e3k_stock", "{'author': 'Someone Else'}");

    let config = ConventionConfig::default();
    assert!(manifest_author::check(&config, &[good]).passed);

    let result = manifest_author::check(&config, &[bad]);
    assert!(!result.passed);
    assert!(result.violations[0].contains("'Someone Else' (expected 'e3k')"));
}

#[test]
fn missing_author_key_fails_as_empty_string() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(temp.path(), "e3k_sales", "{'version': '1.0.0'}");

    let config = ConventionConfig::default();
    let result = manifest_author::check(&config, &[manifest]);

    assert!(!result.passed);
    assert!(result.violations[0].contains("''"));
}

#[test]
fn unparsable_manifest_fails_by_default() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "e3k_sales",
        "{'version': get_version()}",
    );

    let config = ConventionConfig::default();
    let result = manifest_version::check(&config, &[manifest]);

    assert!(!result.passed);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("failed to parse manifest"));
}

#[test]
fn unparsable_manifest_downgrades_to_warning_when_configured() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "e3k_sales",
        "{'version': get_version()}",
    );

    let mut config = ConventionConfig::default();
    config.fail_on_manifest_parse_error = false;
    let result = manifest_version::check(&config, &[manifest]);

    assert!(result.passed);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn custom_author_convention_is_honored() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = write_manifest(temp.path(), "e3k_sales", "{'author': 'acme'}");

    let mut config = ConventionConfig::default();
    config.expected_author = "acme".to_string();
    assert!(manifest_author::check(&config, &[manifest]).passed);
}
