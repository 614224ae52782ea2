pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, at most [`QUESTIONS_PER_PAGE`] long.
///
/// Pages below 1 or past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };

    if start >= items.len() {
        return Vec::new();
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}
