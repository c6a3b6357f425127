use anyhow::{Context, Result};
use glob::Pattern;
use serde::Serialize;

/// Directory names skipped during traversal unless overridden.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["vendor"];

/// Method-name prefixes of the diagnostic calls that are linted.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "Fatal", "Warn", "Sprint", "Print", "Info", "Debug", "Log", "Error", "Skip",
];

/// Verb specifiers that may close a format string.
pub const DEFAULT_VERBS: &[&str] = &["%v", "%s"];

/// Receivers conventionally bound to `*testing.T` and `*testing.B`.
pub const DEFAULT_TEST_RECEIVERS: &[&str] = &["t", "b"];

/// Calls that are never rewritten: error constructors and string conversion.
pub const DEFAULT_EXCLUDED_CALLS: &[&str] =
    &["fmt.Errorf", "errors.Errorf", "xerrors.Errorf", "String"];

/// A call that must never be rewritten.
///
/// Written either as a bare method name (`String`, matches any receiver)
/// or qualified with its receiver (`fmt.Errorf`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedCall {
    pub receiver: Option<String>,
    pub method: String,
}

impl ExcludedCall {
    pub fn parse(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((receiver, method)) => Self {
                receiver: Some(receiver.to_string()),
                method: method.to_string(),
            },
            None => Self {
                receiver: None,
                method: name.to_string(),
            },
        }
    }

    pub fn matches(&self, receiver: &str, method: &str) -> bool {
        self.method == method && self.receiver.as_deref().is_none_or(|r| r == receiver)
    }
}

/// Immutable rule set consulted by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub prefixes: Vec<String>,
    pub verbs: Vec<String>,
    pub test_receivers: Vec<String>,
    pub excluded_calls: Vec<ExcludedCall>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            prefixes: to_strings(DEFAULT_PREFIXES),
            verbs: to_strings(DEFAULT_VERBS),
            test_receivers: to_strings(DEFAULT_TEST_RECEIVERS),
            excluded_calls: DEFAULT_EXCLUDED_CALLS
                .iter()
                .map(|name| ExcludedCall::parse(name))
                .collect(),
        }
    }
}

impl RuleSet {
    pub fn has_target_prefix(&self, method: &str) -> bool {
        self.prefixes.iter().any(|p| method.starts_with(p.as_str()))
    }

    pub fn is_excluded(&self, receiver: &str, method: &str) -> bool {
        self.excluded_calls
            .iter()
            .any(|call| call.matches(receiver, method))
    }

    pub fn is_test_receiver(&self, receiver: &str) -> bool {
        self.test_receivers.iter().any(|r| r == receiver)
    }

    /// Verb specifier that ends `body`, if any.
    pub fn trailing_verb(&self, body: &str) -> Option<&str> {
        self.verbs
            .iter()
            .map(String::as_str)
            .find(|verb| body.ends_with(verb))
    }
}

/// Run configuration, assembled from defaults and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Directory names (or glob patterns) whose subtrees are skipped.
    pub excluded_dirs: Vec<String>,
    pub rules: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_dirs: to_strings(DEFAULT_EXCLUDED_DIRS),
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an exclusion pattern is not a valid glob or a
    /// prefix is empty.
    pub fn validate(&self) -> Result<()> {
        self.exclusion_patterns()?;

        if self.rules.prefixes.iter().any(|p| p.is_empty()) {
            anyhow::bail!("Method prefixes must not be empty");
        }

        Ok(())
    }

    pub fn exclusion_patterns(&self) -> Result<Vec<Pattern>> {
        self.excluded_dirs
            .iter()
            .map(|name| {
                Pattern::new(name)
                    .with_context(|| format!("Invalid exclude pattern: \"{}\"", name))
            })
            .collect()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
