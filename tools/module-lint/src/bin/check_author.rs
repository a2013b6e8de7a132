use module_lint::checks::manifest_author;
use module_lint::config::ConventionConfig;
use module_lint::reporter;
use std::path::PathBuf;
use std::process;

fn main() {
    let files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    let config = ConventionConfig::load();

    let result = manifest_author::check(&config, &files);
    reporter::print_result(&result);

    process::exit(if result.passed { 0 } else { 1 });
}
