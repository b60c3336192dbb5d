/// A single gate in the route table: a path pattern and the roles that may
/// pass. An empty role list admits any authenticated session.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pattern: String,
    required_roles: Vec<String>,
}

impl RouteRule {
    /// A route any authenticated session may enter.
    pub fn authenticated(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            required_roles: Vec::new(),
        }
    }

    /// A route requiring at least one of `roles`.
    pub fn any_of(pattern: &str, roles: &[&str]) -> Self {
        Self {
            pattern: pattern.to_string(),
            required_roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn required_roles(&self) -> &[String] {
        &self.required_roles
    }

    /// Segment-wise match; a `:param` segment matches any single segment.
    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = self.pattern.split('/').filter(|s| !s.is_empty());
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        loop {
            match (pattern.next(), segments.next()) {
                (None, None) => return true,
                (Some(p), Some(s)) => {
                    if !p.starts_with(':') && p != s {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}
