use serde::{Deserialize, Serialize};

/// Page number and page size computed for a single query run.
///
/// Field names match the request keys (`page`, `per_page`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPagination {
    pub page: i64,
    pub per_page: i64,
}

impl ResolvedPagination {
    /// Zero-based row offset of the first row on this page.
    ///
    /// Pages below 1 are treated as the first page.
    pub fn offset(&self) -> u64 {
        let page = self.page.max(1) as u64;
        let per_page = self.per_page.max(0) as u64;
        (page - 1).saturating_mul(per_page)
    }
}
