/// Request key holding the requested page number.
pub const PAGE_KEY: &str = "page";

/// Request key holding the requested page size.
pub const PER_PAGE_KEY: &str = "per_page";

/// Legacy request key accepted as an alias of [`PER_PAGE_KEY`].
pub const LIMIT_KEY: &str = "limit";
