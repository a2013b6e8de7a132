pub mod field_prefix;
pub mod manifest_author;
pub mod manifest_version;

/// Outcome of one check over a list of input files.
///
/// `violations` fail the run; `warnings` and `notes` are reported but never
/// affect the exit code on their own.
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}

impl CheckResult {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            violations: Vec::new(),
            warnings: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn finish(mut self) -> Self {
        self.passed = self.violations.is_empty();
        self
    }
}
