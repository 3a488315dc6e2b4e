use serde::{Deserialize, Serialize};

use crate::{PAGE_KEY, PER_PAGE_KEY, QueryRequest, ResolvedPagination};

/// Absolute maximum page size, even if the request asks for more.
pub const DEFAULT_MAX: i64 = 20;
/// Absolute minimum page size, even if the request asks for less.
pub const DEFAULT_MIN: i64 = 1;
/// Page size used when the request does not name one.
pub const DEFAULT_PER_PAGE: i64 = 20;
/// Page number used when the request does not name one.
pub const DEFAULT_PAGE: i64 = 1;

/// The exact key set of a pagination policy.
pub const POLICY_FIELDS: [&str; 4] = ["max", "min", "per_page", "page"];

/// Effective pagination limits for one query.
///
/// Deserializes from a partial object, filling missing fields from the defaults;
/// unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationPolicy {
    pub max: i64,
    pub min: i64,
    /// Default page size.
    pub per_page: i64,
    /// Default page number.
    pub page: i64,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            min: DEFAULT_MIN,
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
        }
    }
}

impl PaginationPolicy {
    /// Overwrite a single field by name. Returns `false` for unknown names.
    pub fn set(&mut self, field: &str, value: i64) -> bool {
        match field {
            "max" => self.max = value,
            "min" => self.min = value,
            "per_page" => self.per_page = value,
            "page" => self.page = value,
            _ => return false,
        }
        true
    }

    /// Clamp a page size into `[min, max]`.
    ///
    /// Callers must ensure `min <= max`; a reversed range yields `max`.
    #[inline]
    pub fn clamp_per_page(&self, per_page: i64) -> i64 {
        per_page.max(self.min).min(self.max)
    }

    /// Resolve page and page size for a request against this policy.
    pub fn resolve(&self, request: &QueryRequest) -> ResolvedPagination {
        let page = request.int(PAGE_KEY).unwrap_or(self.page);
        let per_page = request.int(PER_PAGE_KEY).unwrap_or(self.per_page);

        ResolvedPagination {
            page,
            per_page: self.clamp_per_page(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = PaginationPolicy::default();
        assert_eq!((p.max, p.min, p.per_page, p.page), (20, 1, 20, 1));
    }

    #[test]
    fn set_by_name() {
        let mut p = PaginationPolicy::default();
        assert!(p.set("max", 100));
        assert!(!p.set("bogus", 1));
        assert_eq!(p.max, 100);
    }

    #[test]
    fn resolve_uses_defaults_for_empty_request() {
        let r = PaginationPolicy::default().resolve(&QueryRequest::new());
        assert_eq!(r, ResolvedPagination { page: 1, per_page: 20 });
    }

    #[test]
    fn resolve_clamps_into_bounds() {
        let p = PaginationPolicy::default();

        let high = p.resolve(&QueryRequest::new().with("page", 3).with("per_page", 50));
        assert_eq!(high, ResolvedPagination { page: 3, per_page: 20 });

        let low = p.resolve(&QueryRequest::new().with("per_page", 0));
        assert_eq!(low.per_page, 1);
    }

    #[test]
    fn resolve_parses_string_values() {
        let p = PaginationPolicy::default();
        let r = p.resolve(&QueryRequest::new().with("page", "4").with("per_page", "15"));
        assert_eq!(r, ResolvedPagination { page: 4, per_page: 15 });
    }

    #[test]
    fn deserialize_partial_fills_defaults() {
        let p: PaginationPolicy = serde_json::from_str(r#"{"max":100}"#).unwrap();
        assert_eq!(p.max, 100);
        assert_eq!(p.min, DEFAULT_MIN);
        assert_eq!(p.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let err = serde_json::from_str::<PaginationPolicy>(r#"{"bogus":1}"#);
        assert!(err.is_err());
    }
}
