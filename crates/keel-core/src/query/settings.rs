use keel_model::{POLICY_FIELDS, PaginationPolicy, QueryValue};
use tracing::warn;

use crate::error::QueryError;

/// Page size used by [`no_pagination`] to make a single page hold "everything".
pub const NO_PAGING_THRESHOLD: i64 = 1_000_000;

/// Merge a declared override onto the default policy and validate the result.
///
/// The override must be a map whose keys are a subset of [`POLICY_FIELDS`] and whose values are
/// integers. The merged policy must also satisfy `min <= max`.
pub fn effective_policy(overrides: &QueryValue) -> Result<PaginationPolicy, QueryError> {
    let Some(entries) = overrides.as_map() else {
        return Err(QueryError::InvalidPaginationSettings(format!(
            "expected a map, got {}",
            shape(overrides)
        )));
    };

    let mut policy = PaginationPolicy::default();
    for (key, value) in entries {
        let Some(n) = value.as_int() else {
            return Err(QueryError::InvalidPaginationSettings(format!(
                "`{key}` must be an integer, got {}",
                shape(value)
            )));
        };
        if !policy.set(key, n) {
            return Err(QueryError::InvalidPaginationSettings(format!(
                "unknown key `{key}` (expected: {})",
                POLICY_FIELDS.join("|")
            )));
        }
    }

    if policy.min > policy.max {
        return Err(QueryError::InvalidPaginationBounds {
            min: policy.min,
            max: policy.max,
        });
    }
    Ok(policy)
}

/// Legacy override that pages with an effectively unlimited page size.
///
/// The query is still paginated, capped at [`NO_PAGING_THRESHOLD`] rows. To skip pagination
/// entirely, build the executor with `with_pagination(false)` instead.
#[deprecated(note = "querying without paging is deprecated; enforce paging in queries")]
pub fn no_pagination() -> QueryValue {
    warn!(
        target: "keel_core::query",
        threshold = NO_PAGING_THRESHOLD,
        "querying without paging is deprecated; enforce paging in queries"
    );
    QueryValue::map([("max", NO_PAGING_THRESHOLD), ("min", NO_PAGING_THRESHOLD)])
}

fn shape(value: &QueryValue) -> &'static str {
    match value {
        QueryValue::Null => "null",
        QueryValue::Bool(_) => "bool",
        QueryValue::Int(_) => "integer",
        QueryValue::Float(_) => "float",
        QueryValue::Str(_) => "string",
        QueryValue::List(_) => "list",
        QueryValue::Map(_) => "map",
    }
}
