use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::CheckResult;

pub fn info(message: &str) {
    println!("[INFO] {message}");
}

pub fn warn(message: &str) {
    println!(
        "{}",
        format!("[WARNING] {message}").if_supports_color(Stdout, |s| s.yellow())
    );
}

pub fn error(message: &str) {
    println!(
        "{}",
        format!("[ERROR] {message}").if_supports_color(Stdout, |s| s.red())
    );
}

pub fn print_result(result: &CheckResult) {
    for note in &result.notes {
        info(note);
    }
    for warning in &result.warnings {
        warn(warning);
    }
    for violation in &result.violations {
        error(violation);
    }

    if result.passed {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            "clean".if_supports_color(Stdout, |s| s.green()),
        );
    } else {
        println!(
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name,
            format!("{} violation(s)", result.violations.len())
                .if_supports_color(Stdout, |s| s.red()),
        );
    }
}
