use serde::Deserialize;

/// One page of a paged listing.
///
/// Mirrors the envelope the order service produces; fields the views never
/// read are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_elements: i64,
    /// Zero-based page index.
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub size: i64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}
