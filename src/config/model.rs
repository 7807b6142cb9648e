use serde::{Deserialize, Serialize};

/// Scanner configuration: which files become analysis candidates.
///
/// Rule behavior is deliberately not configurable; the rule catalog is
/// fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions treated as Python source.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Respect .gitignore rules while scanning (default: false, so runs
    /// are reproducible outside a work tree).
    #[serde(default)]
    pub gitignore: bool,

    /// Exclude patterns (glob syntax).
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Exact file names to skip wherever they appear.
    #[serde(default)]
    pub exclude_names: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            gitignore: false,
            exclude: default_exclude(),
            exclude_names: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_exclude() -> Vec<String> {
    [
        "**/__pycache__/**",
        "**/.git/**",
        "**/venv/**",
        "**/.venv/**",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
