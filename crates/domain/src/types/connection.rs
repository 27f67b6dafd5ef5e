//! Relay-style connection types shared by the GraphQL documents

use serde::{Deserialize, Deserializer, Serialize};

/// Cursor state reported by a connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// A page of `T` with its total count and cursor info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default = "Vec::new", deserialize_with = "non_null_nodes")]
    pub nodes: Vec<T>,
}

impl<T> Connection<T> {
    /// `true` only when `pageInfo` is present and reports more pages.
    pub fn has_next_page(&self) -> bool {
        self.page_info.as_ref().is_some_and(|info| info.has_next_page)
    }
}

/// GraphQL lists are nullable and hold nullable items; keep only the items.
fn non_null_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let nodes = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(nodes.unwrap_or_default().into_iter().flatten().collect())
}
