use module_lint::config::ConventionConfig;
use module_lint::pylint;
use module_lint::reporter;
use std::process;

/// CI variant of the conditional pylint runner: forwards its arguments to
/// pylint verbatim and propagates the raw exit code.
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ConventionConfig::load();
    let ceiling = config.pylint.max_interpreter;

    let Some(current) = pylint::interpreter_version() else {
        reporter::warn("Skipping pylint: could not determine Python version");
        process::exit(0);
    };

    if !pylint::version_gate(current, ceiling) {
        reporter::warn(&format!(
            "Skipping pylint: Python {}.{} > {}.{}",
            current.0, current.1, ceiling.0, ceiling.1,
        ));
        process::exit(0);
    }

    reporter::info(&format!("Running: pylint {}", args.join(" ")));
    match pylint::run_passthrough(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            reporter::error(&format!("Failed to run pylint: {e}"));
            process::exit(1);
        }
    }
}
