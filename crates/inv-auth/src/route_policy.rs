use crate::{Access, RouteRule, Session, authorize};

/// Entry points that render without a session.
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

const PUBLIC_PATHS: [&str; 3] = [LOGIN_PATH, SIGNUP_PATH, UNAUTHORIZED_PATH];

/// Static route table consulted before rendering any view.
///
/// Built once at startup, never mutated. First matching rule wins; paths
/// with no rule fall back to authenticated-only, matching the router's
/// catch-all redirect into the dashboard.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

impl RoutePolicy {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.contains(&path)
    }

    /// Evaluate a navigation attempt. Recomputed on every navigation; never
    /// cached.
    pub fn evaluate(&self, session: Option<&Session>, path: &str) -> Access {
        if Self::is_public(path) {
            return Access::Allow;
        }

        match self.rules.iter().find(|rule| rule.matches(path)) {
            Some(rule) => authorize(session, rule.required_roles()),
            None => authorize::<&str>(session, &[]),
        }
    }
}
