use std::fs;
use std::path::{Path, PathBuf};

use module_lint::checks::field_prefix;
use module_lint::config::ConventionConfig;

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent exists")).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn reports_unprefixed_field_in_inherited_family_model() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("e3k_sales/models/sale.py");
    write_file(
        &source,
        "class Sale(models.Model):\n    _inherit = 'sale.order'\n    margin = fields.Float()\n    e3k_rate = fields.Float()\n",
    );

    let config = ConventionConfig::default();
    let result = field_prefix::check(&config, &[source.clone()]);

    assert!(!result.passed);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("sale.py:3"));
    assert!(result.violations[0].contains("'margin'"));
}

#[test]
fn clean_inherited_model_passes() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("e3k_stock/models/picking.py");
    write_file(
        &source,
        "class Picking(models.Model):\n    _inherit = 'stock.picking'\n    e3k_dock = fields.Char()\n    name = fields.Char()\n    margin = fields.Float()  # no-check\n",
    );

    let config = ConventionConfig::default();
    let result = field_prefix::check(&config, &[source]);

    assert!(result.passed);
    assert!(result.violations.is_empty());
}

#[test]
fn new_models_are_out_of_scope() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("e3k_sales/models/report.py");
    write_file(
        &source,
        "class Report(models.Model):\n    _name = 'e3k.report'\n    margin = fields.Float()\n",
    );

    let config = ConventionConfig::default();
    let result = field_prefix::check(&config, &[source]);

    assert!(result.passed);
}

#[test]
fn files_outside_the_family_are_never_scanned() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("vendor_addons/models/sale.py");
    write_file(
        &source,
        "class Sale(models.Model):\n    _inherit = 'sale.order'\n    margin = fields.Float()\n",
    );

    let config = ConventionConfig::default();
    let result = field_prefix::check(&config, &[source]);

    assert!(result.passed);
    assert!(result.violations.is_empty());
}

#[test]
fn non_python_inputs_are_skipped() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("e3k_sales/static/readme.md");
    write_file(&source, "margin = fields.Float()\n");

    let config = ConventionConfig::default();
    let result = field_prefix::check(&config, &[source]);

    assert!(result.passed);
}

#[test]
fn violations_aggregate_across_files() {
    let temp = tempfile::tempdir().unwrap();
    let first = temp.path().join("e3k_sales/models/sale.py");
    let second = temp.path().join("e3k_stock/models/picking.py");
    write_file(
        &first,
        "class Sale(models.Model):\n    _inherit = 'sale.order'\n    margin = fields.Float()\n",
    );
    write_file(
        &second,
        "class Picking(models.Model):\n    _inherit = 'stock.picking'\n    dock = fields.Char()\n",
    );

    let config = ConventionConfig::default();
    let files: Vec<PathBuf> = vec![first, second];
    let result = field_prefix::check(&config, &files);

    assert!(!result.passed);
    assert_eq!(result.violations.len(), 2);
}

#[test]
fn missing_file_is_ignored() {
    let config = ConventionConfig::default();
    let result = field_prefix::check(
        &config,
        &[PathBuf::from("e3k_sales/models/deleted.py")],
    );
    assert!(result.passed);
}
