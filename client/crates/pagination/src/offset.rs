//! Offset slicing for in-memory listings.

use std::num::NonZeroUsize;

use crate::{Page, PageNumber};

/// Cut one page out of an ordered in-memory listing.
///
/// `total_pages` is `ceil(items.len() / page_size)`. Pages past the end yield
/// an empty envelope with the same totals rather than an error.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use pagination::{PageNumber, paginate};
///
/// let items: Vec<u32> = (1..=12).collect();
/// let size = NonZeroUsize::new(5).expect("non-zero");
/// let last = paginate(&items, PageNumber::new(3).expect("page"), size);
/// assert_eq!(last.items(), &[11, 12]);
/// assert_eq!(last.total_pages(), 3);
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: PageNumber, page_size: NonZeroUsize) -> Page<T> {
    let total = items.len();
    let total_pages = u32::try_from(total.div_ceil(page_size.get())).unwrap_or(u32::MAX);
    let total_results = u64::try_from(total).unwrap_or(u64::MAX);

    let start = usize::try_from(page.index())
        .ok()
        .and_then(|index| index.checked_mul(page_size.get()));
    let selected = match start {
        Some(offset) if page.get() <= total_pages => items
            .iter()
            .skip(offset)
            .take(page_size.get())
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    Page::new(page.get(), selected, total_pages, total_results)
}

#[cfg(test)]
mod tests {
    //! Slicing behaviour across in-range and out-of-range pages.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn fifteen() -> Vec<u32> {
        (1..=15).collect()
    }

    fn size(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero page size")
    }

    fn page(value: i64) -> PageNumber {
        PageNumber::new(value).expect("valid page")
    }

    #[rstest]
    #[case(1, vec![1, 2, 3, 4, 5])]
    #[case(2, vec![6, 7, 8, 9, 10])]
    #[case(3, vec![11, 12, 13, 14, 15])]
    fn slices_each_in_range_page(fifteen: Vec<u32>, #[case] number: i64, #[case] expected: Vec<u32>) {
        let envelope = paginate(&fifteen, page(number), size(5));
        assert_eq!(envelope.items(), expected.as_slice());
        assert_eq!(envelope.total_pages(), 3);
        assert_eq!(envelope.total_results(), 15);
    }

    #[rstest]
    #[case(4)]
    #[case(999)]
    fn out_of_range_pages_are_empty_with_unchanged_totals(fifteen: Vec<u32>, #[case] number: i64) {
        let envelope = paginate(&fifteen, page(number), size(5));
        assert!(envelope.is_empty());
        assert_eq!(envelope.page(), u32::try_from(number).expect("small page"));
        assert_eq!(envelope.total_pages(), 3);
        assert_eq!(envelope.total_results(), 15);
    }

    #[rstest]
    fn last_page_may_be_short() {
        let items: Vec<u32> = (1..=7).collect();
        let envelope = paginate(&items, page(2), size(5));
        assert_eq!(envelope.items(), &[6, 7]);
        assert_eq!(envelope.total_pages(), 2);
    }

    #[rstest]
    fn empty_listing_has_no_pages() {
        let envelope = paginate::<u32>(&[], PageNumber::FIRST, size(5));
        assert!(envelope.is_empty());
        assert_eq!(envelope.total_pages(), 0);
        assert_eq!(envelope.total_results(), 0);
    }
}
