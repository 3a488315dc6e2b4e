use keel_model::ResolvedPagination;

/// A record collection that can be narrowed to one page.
///
/// The executor never inspects elements; it only asks for a paginated copy. For lazy
/// query builders this is typically cheap (it only records `LIMIT`/`OFFSET`).
pub trait Paginate: Sized {
    /// Return the slice of `self` at `page` (1-based) with `per_page` rows.
    fn paginate(&self, page: i64, per_page: i64) -> Self;
}

/// In-memory pagination for plain vectors.
impl<T: Clone> Paginate for Vec<T> {
    fn paginate(&self, page: i64, per_page: i64) -> Self {
        let window = ResolvedPagination { page, per_page };
        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(per_page.max(0)).unwrap_or(usize::MAX);

        self.iter().skip(offset).take(take).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_first_page() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(items.paginate(1, 3), vec![1, 2, 3]);
    }

    #[test]
    fn vec_middle_page() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(items.paginate(2, 4), vec![5, 6, 7, 8]);
    }

    #[test]
    fn vec_partial_last_page() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(items.paginate(4, 3), vec![10]);
    }

    #[test]
    fn vec_page_beyond_end_is_empty() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(items.paginate(9, 5).is_empty());
    }

    #[test]
    fn vec_non_positive_page_reads_first_page() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(items.paginate(0, 2), vec![1, 2]);
        assert_eq!(items.paginate(-1, 2), vec![1, 2]);
    }
}
