//! Query objects: filter, sort and paginate a caller-owned collection.
//!
//! A query is described by a [`QueryDefinition`] and run by a [`PaginatedQueryExecutor`]:
//!
//! 1. `filters` hook (no-op by default);
//! 2. `sorts` hook (no-op by default);
//! 3. pagination under the effective [`PaginationPolicy`], unless disabled.
//!
//! When pagination is enabled the policy is validated before step 1, so a misconfigured
//! definition fails without touching the collection.

mod collection;
pub use collection::Paginate;

mod settings;
#[allow(deprecated)]
pub use settings::no_pagination;
pub use settings::{NO_PAGING_THRESHOLD, effective_policy};

use keel_model::{PaginationPolicy, QueryRequest, QueryValue, ResolvedPagination};
use tracing::{debug, instrument, trace};

use crate::error::QueryError;

/// Caller-side description of a query.
///
/// Every hook has a default; implement only what the query needs.
pub trait QueryDefinition {
    /// The collection this query narrows.
    type Collection: Paginate;

    /// Narrow the collection according to the request. Replace `collection` to apply a filter.
    fn filters(&self, _request: &QueryRequest, _collection: &mut Self::Collection) {}

    /// Order the collection according to the request. Replace `collection` to apply a sort.
    fn sorts(&self, _request: &QueryRequest, _collection: &mut Self::Collection) {}

    /// Override of the default pagination policy.
    ///
    /// Must be a map with any of the keys `max`, `min`, `per_page`, `page` mapped to integers.
    /// Anything else makes [`PaginatedQueryExecutor::execute`] fail.
    fn pagination_settings(&self) -> QueryValue {
        QueryValue::empty_map()
    }
}

/// Runs a [`QueryDefinition`] against one request and one collection.
///
/// Created per request; construction only rewrites the legacy `limit` alias.
pub struct PaginatedQueryExecutor<D: QueryDefinition> {
    definition: D,
    request: QueryRequest,
    collection: D::Collection,
    pagination: bool,
}

impl<D: QueryDefinition> PaginatedQueryExecutor<D> {
    pub fn new(definition: D, mut request: QueryRequest, collection: D::Collection) -> Self {
        if request.normalize_aliases() {
            trace!(target: "keel_core::query", "copied `limit` into `per_page`");
        }
        Self {
            definition,
            request,
            collection,
            pagination: true,
        }
    }

    /// Enable or disable the pagination step (enabled by default).
    #[inline]
    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    #[inline]
    pub fn pagination_enabled(&self) -> bool {
        self.pagination
    }

    #[inline]
    pub fn definition(&self) -> &D {
        &self.definition
    }

    #[inline]
    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    #[inline]
    pub fn collection(&self) -> &D::Collection {
        &self.collection
    }

    #[inline]
    pub fn into_collection(self) -> D::Collection {
        self.collection
    }

    /// The definition's override merged onto the defaults, validated.
    pub fn policy(&self) -> Result<PaginationPolicy, QueryError> {
        effective_policy(&self.definition.pagination_settings())
    }

    /// Page and page size this executor would paginate with.
    pub fn resolve_pagination(&self) -> Result<ResolvedPagination, QueryError> {
        Ok(self.policy()?.resolve(&self.request))
    }

    /// Apply filters, sorts and pagination to the held collection and return it.
    ///
    /// Each call re-applies every step to the current collection; nothing is cached.
    #[instrument(
        level = "trace",
        skip(self),
        fields(query = std::any::type_name::<D>(), pagination = self.pagination)
    )]
    pub fn execute(&mut self) -> Result<&D::Collection, QueryError> {
        let policy = if self.pagination {
            Some(self.policy()?)
        } else {
            None
        };

        self.definition.filters(&self.request, &mut self.collection);
        self.definition.sorts(&self.request, &mut self.collection);

        if let Some(policy) = policy {
            let ResolvedPagination { page, per_page } = policy.resolve(&self.request);
            debug!(target: "keel_core::query", page, per_page, "paginating collection");
            self.collection = self.collection.paginate(page, per_page);
        }
        Ok(&self.collection)
    }
}

/// One-shot form of `PaginatedQueryExecutor::new(D::default(), request, collection).execute()`.
pub fn run<D>(request: QueryRequest, collection: D::Collection) -> Result<D::Collection, QueryError>
where
    D: QueryDefinition + Default,
{
    let mut executor = PaginatedQueryExecutor::new(D::default(), request, collection);
    executor.execute()?;
    Ok(executor.into_collection())
}
