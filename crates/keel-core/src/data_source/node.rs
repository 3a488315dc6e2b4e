use std::ops::Deref;

/// A data source built around one record.
///
/// Dereferences to the record, so presenters can wrap it and add derived fields
/// without re-exposing every record field.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceNode<R> {
    record: R,
}

impl<R> DataSourceNode<R> {
    pub fn new(record: R) -> Self {
        Self { record }
    }

    #[inline]
    pub fn record(&self) -> &R {
        &self.record
    }

    #[inline]
    pub fn into_record(self) -> R {
        self.record
    }
}

impl<R> Deref for DataSourceNode<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.record
    }
}

impl<R> From<R> for DataSourceNode<R> {
    fn from(record: R) -> Self {
        Self::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::{DataSourceRegistry, Record};

    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        kind: &'static str,
        title: String,
        words: usize,
    }

    impl Record for Post {
        fn record_type(&self) -> &str {
            self.kind
        }
    }

    /// Presenter built on a node: adds a derived field, reads the rest from the record.
    struct PostDs(DataSourceNode<Post>);

    impl PostDs {
        fn reading_minutes(&self) -> usize {
            self.0.words.div_ceil(200)
        }
    }

    #[test]
    fn node_delegates_to_record() {
        let node = DataSourceNode::new(Post {
            kind: "Post",
            title: "Hello".into(),
            words: 450,
        });

        assert_eq!(node.title, "Hello");
        assert_eq!(node.record().words, 450);
        assert_eq!(node.into_record().kind, "Post");
    }

    #[test]
    fn nodes_resolved_through_registry() {
        let reg = DataSourceRegistry::<Post, PostDs>::new()
            .with("Post", |post| PostDs(DataSourceNode::from(post)));

        let ds = reg
            .resolve(Post {
                kind: "Post",
                title: "Long read".into(),
                words: 1001,
            })
            .unwrap();

        assert_eq!(ds.0.title, "Long read");
        assert_eq!(ds.reading_minutes(), 6);
    }
}
