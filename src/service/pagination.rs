//! Fixed-size pagination over fully materialized result lists.

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the request names none.
pub const DEFAULT_PAGE: i64 = 1;

/// Parse a raw `page` query value.
///
/// Missing, empty or non-integer values fall back to `DEFAULT_PAGE` rather
/// than failing the request.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Return the 1-based `page` of `items`.
///
/// The slice is `[(page-1)*10, (page-1)*10 + 10)` clamped to the list, so a
/// page past the end (or any page below 1) is empty. Callers decide whether
/// an empty page means "not found".
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));

    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page_holds_at_most_ten() {
        let all = items(23);
        assert_eq!(paginate(&all, 1), &all[0..10]);
    }

    #[test]
    fn test_last_page_is_partial() {
        let all = items(23);
        assert_eq!(paginate(&all, 3), &[21, 22, 23]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let all = items(23);
        assert!(paginate(&all, 4).is_empty());
        assert!(paginate(&all, 1000).is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let all = items(20);
        assert_eq!(paginate(&all, 2).len(), 10);
        assert!(paginate(&all, 3).is_empty());
    }

    #[test]
    fn test_non_positive_pages_are_empty() {
        let all = items(5);
        assert!(paginate(&all, 0).is_empty());
        assert!(paginate(&all, -3).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let all = items(5);
        assert!(paginate(&all, i64::MAX).is_empty());
    }

    #[test]
    fn test_empty_list_has_empty_first_page() {
        let all: Vec<usize> = vec![];
        assert!(paginate(&all, 1).is_empty());
    }

    #[test]
    fn test_parse_page_defaults() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("2.5")), 1);
    }

    #[test]
    fn test_parse_page_reads_integers() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("0")), 0);
        assert_eq!(parse_page(Some("-1")), -1);
    }
}
