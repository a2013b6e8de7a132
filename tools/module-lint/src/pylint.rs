//! Typed wrapper around the external pylint tool: its bitmask exit code,
//! its score line, and the interpreter-version gate that decides whether it
//! runs at all.

use regex::Regex;
use std::io;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

static SCORE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Your code has been rated at (-?\d+(?:\.\d+)?)/10").unwrap()
});

static INTERPRETER_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)").unwrap());

/// Pylint exit code. Each bit is an independent severity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    pub fn code(self) -> i32 {
        self.0
    }

    pub fn fatal(self) -> bool {
        self.0 & 0x01 != 0
    }

    pub fn error(self) -> bool {
        self.0 & 0x02 != 0
    }

    pub fn warning(self) -> bool {
        self.0 & 0x04 != 0
    }

    pub fn refactor(self) -> bool {
        self.0 & 0x08 != 0
    }

    pub fn convention(self) -> bool {
        self.0 & 0x10 != 0
    }

    pub fn usage_error(self) -> bool {
        self.0 & 0x20 != 0
    }

    /// Fatal or error bits always fail the hook; the remaining categories
    /// are tolerated.
    pub fn hard_failure(self) -> bool {
        self.fatal() || self.error()
    }
}

/// Captured run of the scored hook variant.
#[derive(Debug, Clone)]
pub struct ScoredRun {
    pub status: ExitStatus,
    pub score: Option<f64>,
    pub output: String,
}

/// Extract the score from pylint's report output.
pub fn parse_score(output: &str) -> Option<f64> {
    SCORE_LINE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether pylint should run at all under the given interpreter,
/// comparing major.minor against the supported ceiling.
pub fn version_gate(current: (u32, u32), ceiling: (u32, u32)) -> bool {
    current <= ceiling
}

pub fn parse_interpreter_version(text: &str) -> Option<(u32, u32)> {
    let caps = INTERPRETER_VERSION.captures(text)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some((major, minor))
}

/// major.minor of the ambient Python interpreter, from `python3 --version`.
/// Depending on the Python build the version lands on stdout or stderr.
pub fn interpreter_version() -> Option<(u32, u32)> {
    let output = Command::new("python3").arg("--version").output().ok()?;
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    parse_interpreter_version(&text)
}

/// Spawn pylint with inherited stdio and return its raw exit code.
pub fn run_passthrough(args: &[String]) -> io::Result<i32> {
    let status = Command::new("pylint").args(args).status()?;
    Ok(status.code().unwrap_or(1))
}

/// Spawn pylint capturing its output, for the scored hook variant.
pub fn run_scored(args: &[String]) -> io::Result<ScoredRun> {
    let output = Command::new("pylint")
        .args(args)
        .stdin(Stdio::null())
        .output()?;
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    let status = ExitStatus(output.status.code().unwrap_or(1));
    let score = parse_score(&text);
    Ok(ScoredRun {
        status,
        score,
        output: text,
    })
}

/// Two-tier failure policy for a scored run: fatal/error bits propagate the
/// raw code, a score below the minimum fails with 1, and a missing score is
/// tolerated (the caller warns about it).
pub fn enforce(run: &ScoredRun, min_score: f64) -> i32 {
    if run.status.hard_failure() {
        return run.status.code();
    }
    match run.score {
        Some(score) if score < min_score => 1,
        _ => 0,
    }
}
