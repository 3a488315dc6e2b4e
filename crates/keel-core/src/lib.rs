//! Application-layer conventions over a record framework.
//!
//! - [`query`]: filter, sort and paginate a caller-owned collection under a validated policy;
//! - [`service`]: perform-once units of business logic;
//! - [`form`]: parameter validators standing in for persisted models;
//! - [`data_source`]: registry resolving a record to its presentation companion.

pub mod error;
pub use error::{DataSourceError, FormError, QueryError};

pub mod query;
pub use query::{Paginate, PaginatedQueryExecutor, QueryDefinition, run};

pub mod service;
pub use service::{Performer, Service, perform};

pub mod form;
pub use form::{Checked, Form, check, check_params};

pub mod data_source;
pub use data_source::{DataSourceNode, DataSourceRegistry, Record};

pub mod prelude {
    pub use crate::data_source::{DataSourceNode, DataSourceRegistry, Record};
    pub use crate::error::{DataSourceError, FormError, QueryError};
    pub use crate::form::{Checked, Form, check, check_params};
    pub use crate::query::{Paginate, PaginatedQueryExecutor, QueryDefinition, run};
    pub use crate::service::{Performer, Service, perform};
    pub use keel_model::{FormErrors, PaginationPolicy, QueryRequest, QueryValue};
}
