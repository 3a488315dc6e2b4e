use thiserror::Error;

/// Misconfiguration of a query definition.
///
/// These are programming errors in the definition, not runtime conditions: they are returned
/// before any filter, sort or paginate step runs and are meant to be propagated, not handled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid pagination settings: {0}")]
    InvalidPaginationSettings(String),
    #[error("invalid pagination settings: min ({min}) is greater than max ({max})")]
    InvalidPaginationBounds { min: i64, max: i64 },
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid form parameters: {0}")]
    Params(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error(
        "data source node not found for record type `{record_type}`{}",
        in_namespace(.namespace)
    )]
    NotFound {
        record_type: String,
        namespace: Option<String>,
    },
}

fn in_namespace(namespace: &Option<String>) -> String {
    match namespace {
        Some(ns) => format!(" in `{ns}`"),
        None => String::new(),
    }
}
