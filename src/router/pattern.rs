//! Route pattern classification.

use std::fmt;

/// Marks a path segment that matches exactly one segment of any value.
pub const VARIABLE_MARKER: &str = "{}";

/// Marks the end of a literal prefix; anything after it in a request path is accepted.
pub const STATIC_MARKER: &str = "{*}";

/// How a registered path pattern is matched against request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Matched by direct key lookup.
    Exact,
    /// Contains [`VARIABLE_MARKER`]; matched segment by segment.
    Variable,
    /// Contains [`STATIC_MARKER`]; matched on its literal prefix only.
    Static,
}

impl PatternKind {
    /// Classify a pattern.
    ///
    /// The variable marker is checked first, so a pattern carrying both
    /// markers is [`PatternKind::Variable`].
    pub fn classify(pattern: &str) -> Self {
        if pattern.contains(VARIABLE_MARKER) {
            PatternKind::Variable
        } else if pattern.contains(STATIC_MARKER) {
            PatternKind::Static
        } else {
            PatternKind::Exact
        }
    }

    /// The marker that defines this kind, if any.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            PatternKind::Exact => None,
            PatternKind::Variable => Some(VARIABLE_MARKER),
            PatternKind::Static => Some(STATIC_MARKER),
        }
    }

    /// Bracketed label used in route listings; empty for exact routes.
    pub fn qualifier(&self) -> &'static str {
        match self {
            PatternKind::Exact => "",
            PatternKind::Variable => "[URL contains variable]",
            PatternKind::Static => "[URL refers to static content]",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Exact => f.write_str("exact"),
            PatternKind::Variable => f.write_str("variable"),
            PatternKind::Static => f.write_str("static"),
        }
    }
}

/// The part of `pattern` before the first occurrence of the marker for `kind`.
///
/// Exact patterns, and patterns that lack the marker, are returned whole.
pub fn literal_prefix(pattern: &str, kind: PatternKind) -> &str {
    kind.marker()
        .and_then(|marker| pattern.find(marker))
        .map_or(pattern, |idx| &pattern[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(PatternKind::classify("/users"), PatternKind::Exact);
        assert_eq!(PatternKind::classify("/users/{}"), PatternKind::Variable);
        assert_eq!(PatternKind::classify("/assets/{*}"), PatternKind::Static);
        assert_eq!(PatternKind::classify("/"), PatternKind::Exact);
    }

    #[test]
    fn test_variable_marker_wins_over_static_marker() {
        assert_eq!(PatternKind::classify("/files/{}/{*}"), PatternKind::Variable);
        assert_eq!(PatternKind::classify("/files/{*}/{}"), PatternKind::Variable);
    }

    #[test]
    fn test_literal_prefix() {
        assert_eq!(literal_prefix("/users/{}/posts/{}", PatternKind::Variable), "/users/");
        assert_eq!(literal_prefix("/assets/{*}", PatternKind::Static), "/assets/");
        assert_eq!(literal_prefix("/assets{*}", PatternKind::Static), "/assets");
        assert_eq!(literal_prefix("/health", PatternKind::Exact), "/health");
        assert_eq!(literal_prefix("{*}", PatternKind::Static), "");
    }
}
