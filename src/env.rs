use std::env;

pub const NO_COLOR: &str = "NO_COLOR";
pub const MINIUNIT_COLOR: &str = "MINIUNIT_COLOR";
pub const MINIUNIT_ELAPSED_PRECISION: &str = "MINIUNIT_ELAPSED_PRECISION";

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct MiniunitEnv {
    pub color: Option<String>,
    pub elapsed_precision: Option<String>,
    pub no_color: Option<String>,
}

impl MiniunitEnv {
    /// Create a structure with current environment variable
    pub fn init() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from `lookup`, which maps a variable name to its raw value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_var = |name: &str| non_blank(lookup(name));
        Self {
            color: env_var(MINIUNIT_COLOR),
            elapsed_precision: env_var(MINIUNIT_ELAPSED_PRECISION),
            no_color: env_var(NO_COLOR),
        }
    }
}

/// If `value` is set and, after trimming whitespace, is not empty string, then return that trimmed
/// string. Else None.
fn non_blank(value: Option<String>) -> Option<String> {
    match value.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.to_string()),
    }
}
