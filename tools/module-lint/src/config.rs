use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Conventions enforced across e3k modules. Every value the checks consult
/// lives here so a repository can override it from `module-lint.json`
/// instead of patching the binaries.
#[derive(Debug, Clone)]
pub struct ConventionConfig {
    /// Path-segment prefix that marks a module as belonging to the family.
    pub family_prefix: String,
    /// Field names exempt from the prefix requirement.
    pub allowed_unprefixed: Vec<String>,
    /// Inline marker that exempts a single line from the field-prefix check.
    pub suppression_marker: String,
    /// File name of the module descriptor.
    pub manifest_filename: String,
    /// Required `author` value in module descriptors.
    pub expected_author: String,
    /// Whether a descriptor that cannot be parsed counts as a failure.
    pub fail_on_manifest_parse_error: bool,
    pub pylint: PylintConfig,
}

#[derive(Debug, Clone)]
pub struct PylintConfig {
    /// Highest interpreter major.minor pylint is run under.
    pub max_interpreter: (u32, u32),
    /// Minimum acceptable score for the scored hook variant.
    pub min_score: f64,
    /// Rcfile the hook variant prepends to the pylint command line.
    pub rcfile: String,
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self {
            family_prefix: "e3k_".to_string(),
            allowed_unprefixed: ["name", "display_name", "create_date", "write_date"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            suppression_marker: "# no-check".to_string(),
            manifest_filename: "__manifest__.py".to_string(),
            expected_author: "e3k".to_string(),
            fail_on_manifest_parse_error: true,
            pylint: PylintConfig {
                max_interpreter: (3, 11),
                min_score: 7.0,
                rcfile: ".pre-commit-hooks/.pylintrc.ini".to_string(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigOverride {
    family_prefix: Option<String>,
    allowed_unprefixed: Option<Vec<String>>,
    suppression_marker: Option<String>,
    manifest_filename: Option<String>,
    expected_author: Option<String>,
    fail_on_manifest_parse_error: Option<bool>,
    pylint: Option<PylintOverride>,
}

#[derive(Debug, Default, Deserialize)]
struct PylintOverride {
    max_interpreter: Option<(u32, u32)>,
    min_score: Option<f64>,
    rcfile: Option<String>,
}

impl ConventionConfig {
    /// Defaults merged with `module-lint.json` from the working directory,
    /// when one exists. A malformed override file is reported and ignored.
    pub fn load() -> Self {
        Self::load_from(Path::new("module-lint.json"))
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::default();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return config,
        };
        match serde_json::from_str::<ConfigOverride>(&content) {
            Ok(over) => config.apply(over),
            Err(e) => {
                eprintln!("[WARNING] ignoring malformed {}: {}", path.display(), e);
            }
        }
        config
    }

    fn apply(&mut self, over: ConfigOverride) {
        if let Some(v) = over.family_prefix {
            self.family_prefix = v;
        }
        if let Some(v) = over.allowed_unprefixed {
            self.allowed_unprefixed = v;
        }
        if let Some(v) = over.suppression_marker {
            self.suppression_marker = v;
        }
        if let Some(v) = over.manifest_filename {
            self.manifest_filename = v;
        }
        if let Some(v) = over.expected_author {
            self.expected_author = v;
        }
        if let Some(v) = over.fail_on_manifest_parse_error {
            self.fail_on_manifest_parse_error = v;
        }
        if let Some(p) = over.pylint {
            if let Some(v) = p.max_interpreter {
                self.pylint.max_interpreter = v;
            }
            if let Some(v) = p.min_score {
                self.pylint.min_score = v;
            }
            if let Some(v) = p.rcfile {
                self.pylint.rcfile = v;
            }
        }
    }

    /// Family label without the trailing separator, for diagnostics
    /// ("e3k_" -> "e3k").
    pub fn family_label(&self) -> &str {
        self.family_prefix.trim_end_matches('_')
    }

    pub fn is_allowed_unprefixed(&self, field_name: &str) -> bool {
        self.allowed_unprefixed.iter().any(|f| f == field_name)
    }
}
