//! Route storage, per method and per pattern kind.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::parser::Method;
use crate::router::handler::HandlerFn;
use crate::router::pattern::PatternKind;

struct RouteEntry {
    pattern: String,
    handlers: Vec<HandlerFn>,
}

/// Patterns of one kind under one method, kept in registration order.
#[derive(Default)]
pub(crate) struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Store `handlers` under `pattern`, returning `true` if an earlier list was replaced.
    ///
    /// A replaced route keeps its original position.
    fn insert(&mut self, pattern: String, handlers: Vec<HandlerFn>) -> bool {
        if let Some(&idx) = self.index.get(&pattern) {
            self.entries[idx].handlers = handlers;
            return true;
        }
        self.index.insert(pattern.clone(), self.entries.len());
        self.entries.push(RouteEntry { pattern, handlers });
        false
    }

    /// The stored pattern and its handlers.
    pub(crate) fn get(&self, pattern: &str) -> Option<(&str, &[HandlerFn])> {
        self.index.get(pattern).map(|&idx| {
            let entry = &self.entries[idx];
            (entry.pattern.as_str(), entry.handlers.as_slice())
        })
    }

    /// `(pattern, handlers)` pairs in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[HandlerFn])> {
        self.entries
            .iter()
            .map(|entry| (entry.pattern.as_str(), entry.handlers.as_slice()))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The three tables held for one method.
#[derive(Default)]
pub(crate) struct MethodRoutes {
    exact: RouteTable,
    variable: RouteTable,
    prefix: RouteTable,
}

impl MethodRoutes {
    pub(crate) fn table(&self, kind: PatternKind) -> &RouteTable {
        match kind {
            PatternKind::Exact => &self.exact,
            PatternKind::Variable => &self.variable,
            PatternKind::Static => &self.prefix,
        }
    }

    fn table_mut(&mut self, kind: PatternKind) -> &mut RouteTable {
        match kind {
            PatternKind::Exact => &mut self.exact,
            PatternKind::Variable => &mut self.variable,
            PatternKind::Static => &mut self.prefix,
        }
    }
}

/// Every registered route, keyed by (method, pattern kind, pattern).
///
/// Only GET, POST, PATCH and DELETE hold routes. The registry is filled
/// while the router is being configured and only read afterwards.
#[derive(Default)]
pub struct RouteRegistry {
    routes: HashMap<Method, MethodRoutes>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handlers` for `method` and `pattern`, replacing any earlier list for the same key.
    ///
    /// Returns `false` when the method cannot carry routes. `OPTIONS` is
    /// skipped silently since preflight requests never reach the registry;
    /// any other unsupported method is logged.
    pub fn register(&mut self, method: Method, pattern: impl Into<String>, handlers: Vec<HandlerFn>) -> bool {
        let pattern = pattern.into();
        if method == Method::OPTIONS {
            return false;
        }
        if !method.is_routable() {
            warn!("Don't yet handle the HTTP method '{method}', ignoring route '{pattern}'");
            return false;
        }

        let kind = PatternKind::classify(&pattern);
        let table = self.routes.entry(method).or_default().table_mut(kind);
        if table.insert(pattern.clone(), handlers) {
            debug!("Replaced {kind} route [{method}] {pattern}");
        }
        true
    }

    pub(crate) fn routes_for(&self, method: Method) -> Option<&MethodRoutes> {
        self.routes.get(&method)
    }

    /// Whether a route is stored under exactly this method and pattern.
    pub fn contains(&self, method: Method, pattern: &str) -> bool {
        self.routes_for(method)
            .is_some_and(|routes| routes.table(PatternKind::classify(pattern)).get(pattern).is_some())
    }

    /// Total number of stored routes.
    pub fn len(&self) -> usize {
        self.routes
            .values()
            .map(|routes| routes.exact.len() + routes.variable.len() + routes.prefix.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One line per route, formatted `[METHOD] [qualifier] -> pattern`.
    ///
    /// Ordered by method (GET, POST, PATCH, DELETE), then kind (exact,
    /// variable, static), then registration order. Rebuilt on every call.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.len());
        for method in Method::ROUTABLE {
            let Some(routes) = self.routes_for(method) else {
                continue;
            };
            for kind in [PatternKind::Exact, PatternKind::Variable, PatternKind::Static] {
                for (pattern, _) in routes.table(kind).iter() {
                    names.push(format!(
                        "{method:<8} {qualifier:<31} -> {pattern}",
                        method = format!("[{method}]"),
                        qualifier = kind.qualifier(),
                    ));
                }
            }
        }
        names
    }
}

impl fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
