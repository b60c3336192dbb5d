/// Ordered path-prefix → base-URL table.
///
/// Resolution is pure and deterministic: prefixes are tried in table order,
/// the first match wins, and anything unmatched goes to the default target.
#[derive(Debug, Clone)]
pub struct BackendRoutes {
    routes: Vec<(String, String)>,
    default_url: String,
}

impl BackendRoutes {
    pub fn new(routes: Vec<(&str, String)>, default_url: String) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|(prefix, url)| (prefix.to_string(), trim_base(url)))
                .collect(),
            default_url: trim_base(default_url),
        }
    }

    /// Base URL serving a logical path.
    pub fn resolve(&self, path: &str) -> &str {
        self.routes
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, url)| url.as_str())
            .unwrap_or(&self.default_url)
    }

    /// Full URL for a logical path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.resolve(path), path)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
