use std::fmt;

/// Build metadata, injected at compile time through
/// `QUERY_JSON_VERSION`, `QUERY_JSON_COMMIT` and `QUERY_JSON_DATE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

impl BuildInfo {
    /// Metadata of the running binary
    pub const fn current() -> Self {
        Self {
            version: or_default(option_env!("QUERY_JSON_VERSION"), "dev"),
            commit: or_default(option_env!("QUERY_JSON_COMMIT"), "unknown"),
            date: or_default(option_env!("QUERY_JSON_DATE"), "unknown"),
        }
    }
}

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// Three-line version banner
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query_json version {}", self.version)?;
        writeln!(f, "  commit: {}", self.commit)?;
        writeln!(f, "  built: {}", self.date)
    }
}
