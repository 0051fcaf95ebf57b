//! Resolving a request method and path to the handlers that serve it.
//!
//! Resolution order is exact, then variable, then static. Within the
//! variable and static kinds the first pattern registered wins.

use crate::parser::Method;
use crate::router::config::MatchMode;
use crate::router::handler::HandlerFn;
use crate::router::pattern::{literal_prefix, PatternKind, VARIABLE_MARKER};
use crate::router::registry::RouteRegistry;

/// A resolved route.
#[derive(Clone, Copy)]
pub struct RouteMatch<'r> {
    /// The pattern as it was registered.
    pub pattern: &'r str,
    pub kind: PatternKind,
    pub handlers: &'r [HandlerFn],
}

impl std::fmt::Debug for RouteMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.pattern)
            .field("kind", &self.kind)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl RouteRegistry {
    /// Find the route for `method` and `path`, or `None` if nothing matches.
    pub fn resolve<'r>(&'r self, method: Method, path: &str, mode: MatchMode) -> Option<RouteMatch<'r>> {
        let routes = self.routes_for(method)?;

        if let Some((pattern, handlers)) = routes.table(PatternKind::Exact).get(path) {
            return Some(RouteMatch { pattern, kind: PatternKind::Exact, handlers });
        }

        let variable = routes
            .table(PatternKind::Variable)
            .iter()
            .find(|(pattern, _)| variable_matches(pattern, path, mode))
            .map(|(pattern, handlers)| RouteMatch { pattern, kind: PatternKind::Variable, handlers });
        if variable.is_some() {
            return variable;
        }

        routes
            .table(PatternKind::Static)
            .iter()
            .find(|(pattern, _)| static_matches(pattern, path, mode))
            .map(|(pattern, handlers)| RouteMatch { pattern, kind: PatternKind::Static, handlers })
    }
}

/// Whether a variable pattern accepts `path`.
///
/// The literal prefix must match first, then both must have the same number
/// of `/`-separated segments and every segment other than `{}` must match.
pub fn variable_matches(pattern: &str, path: &str, mode: MatchMode) -> bool {
    let prefix = literal_prefix(pattern, PatternKind::Variable);
    if !mode.starts_with(path, prefix) {
        return false;
    }
    if pattern.split('/').count() != path.split('/').count() {
        return false;
    }
    pattern
        .split('/')
        .zip(path.split('/'))
        .all(|(expected, actual)| expected == VARIABLE_MARKER || mode.str_eq(expected, actual))
}

/// Whether a static pattern accepts `path`: only the literal prefix counts.
pub fn static_matches(pattern: &str, path: &str, mode: MatchMode) -> bool {
    mode.starts_with(path, literal_prefix(pattern, PatternKind::Static))
}
