//! Fixed-size pagination over ordered result lists.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return the 1-indexed `page` slice of `items`.
///
/// Out-of-range pages (including page 0) yield an empty slice rather than an
/// error; callers decide whether an empty page is a failure.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }

    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}
