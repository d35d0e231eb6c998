use serde::{Deserialize, Serialize};

/// Category record as the backend stores it.
///
/// The parent reference graph is assumed acyclic; the backend owns that
/// invariant and the client rebuilds its tree view from this flat shape on
/// every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
