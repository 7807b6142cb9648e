use serde::Serialize;

/// The fixed rule catalog. Variant order is catalog order, so deriving `Ord`
/// gives the rule-code component of the report sort key for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RuleCode {
    S001,
    S002,
    S003,
    S004,
    S005,
    S006,
    S007,
    S008,
    S009,
    S010,
    S011,
    S012,
}

impl RuleCode {
    /// Every rule, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::S001,
        Self::S002,
        Self::S003,
        Self::S004,
        Self::S005,
        Self::S006,
        Self::S007,
        Self::S008,
        Self::S009,
        Self::S010,
        Self::S011,
        Self::S012,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }

    /// Message template for this rule. `{}` marks the slot where the
    /// offending identifier is substituted at render time.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::S001 => "Too long",
            Self::S002 => "Indentation is not a multiple of four",
            Self::S003 => "Unnecessary semicolon",
            Self::S004 => "At least two spaces required before inline comments",
            Self::S005 => "TODO found",
            Self::S006 => "More than two blank lines preceding a code line",
            Self::S007 => "Too many spaces after class/def keyword",
            Self::S008 => "Class name '{}' should use CamelCase",
            Self::S009 => "Function name '{}' should use snake_case",
            Self::S010 => "Argument name '{}' should be snake_case",
            Self::S011 => "Variable name '{}' should be snake_case",
            Self::S012 => "Default argument value is mutable",
        }
    }

    /// Render the message, substituting the placeholder into the template
    /// slot when both are present.
    #[must_use]
    pub fn message(self, placeholder: Option<&str>) -> String {
        let template = self.template();
        match placeholder {
            Some(name) if template.contains("{}") => template.replacen("{}", name, 1),
            _ => template.to_string(),
        }
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("Unknown rule code: {s}"))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
