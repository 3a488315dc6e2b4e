//! Data sources: presentation-layer companions resolved from a record's type.
//!
//! A [`DataSourceRegistry`] is populated at startup with one factory per record type and turns a
//! record into its node. Lookup is explicit; an unregistered type yields
//! [`DataSourceError::NotFound`].

mod node;
pub use node::DataSourceNode;

use std::collections::HashMap;

use tracing::{instrument, trace};

use crate::error::DataSourceError;

/// A record that knows its own type identifier.
pub trait Record {
    fn record_type(&self) -> &str;
}

type Factory<R, D> = Box<dyn Fn(R) -> D + Send + Sync>;
type Hook<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Maps record types to data-source factories.
pub struct DataSourceRegistry<R, D> {
    namespace: Option<String>,
    factories: HashMap<String, Factory<R, D>>,
    record_hook: Option<Hook<R>>,
    source_hook: Option<Hook<D>>,
}

impl<R: Record, D> DataSourceRegistry<R, D> {
    pub fn new() -> Self {
        Self {
            namespace: None,
            factories: HashMap::new(),
            record_hook: None,
            source_hook: None,
        }
    }

    /// Label used in lookup errors, e.g. `"admin"` for an admin-facing set of nodes.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Rewrite each record before its type is looked up.
    pub fn with_record_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        self.record_hook = Some(Box::new(hook));
        self
    }

    /// Rewrite each data source after it is built.
    pub fn with_data_source_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(D) -> D + Send + Sync + 'static,
    {
        self.source_hook = Some(Box::new(hook));
        self
    }

    /// Register the factory for a record type, replacing any previous one.
    pub fn register<F>(&mut self, record_type: impl Into<String>, factory: F)
    where
        F: Fn(R) -> D + Send + Sync + 'static,
    {
        self.factories.insert(record_type.into(), Box::new(factory));
    }

    /// Builder-style [`DataSourceRegistry::register`].
    pub fn with<F>(mut self, record_type: impl Into<String>, factory: F) -> Self
    where
        F: Fn(R) -> D + Send + Sync + 'static,
    {
        self.register(record_type, factory);
        self
    }

    pub fn contains(&self, record_type: &str) -> bool {
        self.factories.contains_key(record_type)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Build the data source for `record`.
    #[instrument(level = "trace", skip_all, fields(namespace = self.namespace.as_deref()))]
    pub fn resolve(&self, record: R) -> Result<D, DataSourceError> {
        let record = match &self.record_hook {
            Some(hook) => hook(record),
            None => record,
        };

        let factory = self.factories.get(record.record_type()).ok_or_else(|| {
            DataSourceError::NotFound {
                record_type: record.record_type().to_string(),
                namespace: self.namespace.clone(),
            }
        })?;
        trace!(
            target: "keel_core::data_source",
            record_type = record.record_type(),
            "data source resolved"
        );

        let source = factory(record);
        Ok(match &self.source_hook {
            Some(hook) => hook(source),
            None => source,
        })
    }
}

impl<R: Record, D> Default for DataSourceRegistry<R, D> {
    fn default() -> Self {
        Self::new()
    }
}
