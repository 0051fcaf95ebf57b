//! Router configuration.

use serde::Deserialize;

/// How pattern prefixes and segments are compared with request paths.
///
/// Exact routes are always looked up verbatim; the mode only affects
/// variable and static patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// ASCII case folding, so `/Users/{}` matches `/users/7`. Non-ASCII
    /// characters must match exactly: `/Ünïcode/{}` does not match `/ünïcode/x`.
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

impl MatchMode {
    /// Compare two strings under this mode.
    pub fn str_eq(&self, a: &str, b: &str) -> bool {
        match self {
            MatchMode::CaseInsensitive => a.eq_ignore_ascii_case(b),
            MatchMode::CaseSensitive => a == b,
        }
    }

    /// Whether `path` begins with `prefix` under this mode.
    pub fn starts_with(&self, path: &str, prefix: &str) -> bool {
        // Byte comparison: the prefix length need not fall on a char boundary of `path`.
        let Some(head) = path.as_bytes().get(..prefix.len()) else {
            return false;
        };
        match self {
            MatchMode::CaseInsensitive => head.eq_ignore_ascii_case(prefix.as_bytes()),
            MatchMode::CaseSensitive => head == prefix.as_bytes(),
        }
    }
}

/// The CORS headers stamped on every response and sent for preflight requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsPolicy {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

impl Default for CorsPolicy {
    /// Allow everything.
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "GET, POST, PATCH, OPTIONS, PUT, DELETE".to_string(),
            allow_headers: "*".to_string(),
        }
    }
}

/// Router configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Log every request received and every request left unmatched.
    pub verbose: bool,
    /// How variable and static patterns compare with request paths.
    pub match_mode: MatchMode,
    /// Stop an endpoint's sequence once a unit has written the response and
    /// returned `Ok`. Off by default, in which case later units still run.
    pub terminal_success: bool,
    pub cors: CorsPolicy,
}
