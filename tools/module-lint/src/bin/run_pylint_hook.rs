use module_lint::config::ConventionConfig;
use module_lint::pylint;
use module_lint::reporter;
use std::process;

/// Pre-commit variant of the conditional pylint runner: pins the repository
/// rcfile, captures the report, and enforces the minimum score on top of
/// pylint's fatal/error bits.
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

    let mut command_args = vec![format!("--rcfile={}", config.pylint.rcfile)];
    command_args.extend(args);
    reporter::info(&format!("Running: pylint {}", command_args.join(" ")));

    let run = match pylint::run_scored(&command_args) {
        Ok(run) => run,
        Err(e) => {
            reporter::error(&format!("Failed to run pylint: {e}"));
            process::exit(1);
        }
    };

    print!("{}", run.output);

    if run.score.is_none() && !run.status.hard_failure() {
        reporter::warn("Could not extract pylint score from output");
    }
    if let Some(score) = run.score {
        if score < config.pylint.min_score && !run.status.hard_failure() {
            reporter::error(&format!(
                "Pylint score {:.2} is below the minimum {:.2}",
                score, config.pylint.min_score,
            ));
        }
    }

    process::exit(pylint::enforce(&run, config.pylint.min_score));
}
