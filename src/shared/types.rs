use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination parameters for list endpoints.
///
/// The public convention is 1-based throughout this crate. The backend's
/// product endpoints count pages from 0, so HTTP clients call
/// [`PaginationQuery::zero_based`] when building the query string. That
/// mapping lives here so callers never see both conventions.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// 0-based page index for endpoints counting from zero
    pub fn zero_based(&self) -> i64 {
        self.page.max(1) - 1
    }

    /// Get clamped page size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Page envelope returned by the backend's paginated endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: i64,
    pub total_elements: i64,
    /// 0-based page index as the backend reports it
    pub number: i64,
    pub size: i64,
}

impl<T> Page<T> {
    /// 1-based page number matching the crate-wide convention
    pub fn current_page(&self) -> i64 {
        self.number + 1
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification serialized as `field,direction` on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn to_param(&self) -> String {
        format!("{},{}", self.field, self.direction.as_param())
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new("name", SortDirection::Asc)
    }
}
