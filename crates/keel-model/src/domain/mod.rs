mod constants;
pub use constants::{LIMIT_KEY, PAGE_KEY, PER_PAGE_KEY};

mod query_value;
pub use query_value::QueryValue;

mod query_request;
pub use query_request::QueryRequest;

mod pagination_policy;
pub use pagination_policy::{
    DEFAULT_MAX, DEFAULT_MIN, DEFAULT_PAGE, DEFAULT_PER_PAGE, PaginationPolicy, POLICY_FIELDS,
};

mod resolved_pagination;
pub use resolved_pagination::ResolvedPagination;

mod form_errors;
pub use form_errors::FormErrors;

