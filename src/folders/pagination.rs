//! Offset pagination over a materialized sequence

use serde::Serialize;
use uuid::Uuid;

use super::token::{decode_token, encode_token};
use crate::error::PagingError;

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parameters for a single page request.
///
/// # Example
/// ```ignore
/// let request = PageRequest::new(org_id)
///     .page_size(5)
///     .token(previous.next_token);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Organization whose folders are paged
    pub org_id: Uuid,
    /// Items per page; must be at least 1
    pub page_size: usize,
    /// Continuation token; empty requests the first page
    pub token: String,
}

impl PageRequest {
    /// First page for `org_id` at the default page size.
    pub fn new(org_id: Uuid) -> Self {
        Self {
            org_id,
            page_size: DEFAULT_PAGE_SIZE,
            token: String::new(),
        }
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the continuation token returned by the previous page.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page, in sequence order
    pub items: Vec<T>,

    /// Token for the next page; empty when this is the last page
    pub next_token: String,
}

impl<T> Page<T> {
    /// An empty last page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_token: String::new(),
        }
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_token.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut one page out of `items`.
///
/// An empty `token` starts at offset 0. The token is validated before the
/// page size, and both are validated before any slicing, so a failed call
/// never yields a partial page. An offset at or past the end gives an empty
/// page with no next token.
pub fn paginate<T>(items: Vec<T>, page_size: usize, token: &str) -> Result<Page<T>, PagingError> {
    let start = if token.is_empty() {
        0
    } else {
        decode_token(token)?
    };

    if page_size == 0 {
        return Err(PagingError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }

    let len = items.len();
    if start >= len {
        return Ok(Page::empty());
    }

    let end = start.saturating_add(page_size).min(len);
    let next_token = if end < len {
        encode_token(end)
    } else {
        String::new()
    };

    let items = items.into_iter().skip(start).take(end - start).collect();

    Ok(Page { items, next_token })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_page_request_defaults() {
        let org = Uuid::from_u128(1);
        let request = PageRequest::new(org);
        assert_eq!(request.org_id, org);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert!(request.token.is_empty());
    }

    #[test]
    fn test_page_request_builder() {
        let request = PageRequest::new(Uuid::nil()).page_size(5).token("NQ==");
        assert_eq!(request.page_size, 5);
        assert_eq!(request.token, "NQ==");
    }

    #[test]
    fn test_first_page() {
        let page = paginate(numbers(15), 5, "").unwrap();
        assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(decode_token(&page.next_token).unwrap(), 5);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_follow_tokens_through_three_pages() {
        let first = paginate(numbers(15), 5, "").unwrap();
        let second = paginate(numbers(15), 5, &first.next_token).unwrap();
        assert_eq!(second.items, vec![5, 6, 7, 8, 9]);
        assert_eq!(decode_token(&second.next_token).unwrap(), 10);

        let third = paginate(numbers(15), 5, &second.next_token).unwrap();
        assert_eq!(third.items, vec![10, 11, 12, 13, 14]);
        assert!(third.next_token.is_empty());
    }

    #[test]
    fn test_partial_last_page() {
        let page = paginate(numbers(7), 5, &encode_token(5)).unwrap();
        assert_eq!(page.items, vec![5, 6]);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_empty_sequence() {
        let page = paginate(Vec::<usize>::new(), 5, "").unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_offset_at_end_is_empty_page() {
        let page = paginate(numbers(10), 5, &encode_token(10)).unwrap();
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_offset_past_end_is_empty_page() {
        let page = paginate(numbers(10), 5, &encode_token(1_000)).unwrap();
        assert!(page.is_empty());
        assert!(page.next_token.is_empty());
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let page = paginate(numbers(3), usize::MAX, &encode_token(1)).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.next_token.is_empty());
    }

    #[test]
    fn test_page_size_larger_than_sequence() {
        let page = paginate(numbers(3), 50, "").unwrap();
        assert_eq!(page.len(), 3);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_zero_page_size_is_invalid_argument() {
        assert!(matches!(
            paginate(numbers(3), 0, ""),
            Err(PagingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(matches!(
            paginate(numbers(3), 5, "invalidToken"),
            Err(PagingError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_invalid_token_wins_over_zero_page_size() {
        assert!(matches!(
            paginate(numbers(3), 0, "invalidToken"),
            Err(PagingError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_page_serializes_items_and_token() {
        let page = paginate(numbers(4), 2, "").unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["items"], serde_json::json!([0, 1]));
        assert_eq!(json["next_token"], encode_token(2));
    }

    proptest! {
        #[test]
        fn prop_pages_partition_sequence(len in 0usize..200, size in 1usize..40) {
            let mut token = String::new();
            let mut collected = Vec::new();
            let mut calls = 0usize;

            loop {
                let page = paginate(numbers(len), size, &token).unwrap();
                calls += 1;
                collected.extend(page.items);
                if page.next_token.is_empty() {
                    break;
                }
                token = page.next_token;
            }

            prop_assert_eq!(collected, numbers(len));
            prop_assert!(calls <= len.div_ceil(size).max(1));
        }

        #[test]
        fn prop_paginate_is_idempotent(len in 0usize..100, size in 1usize..20, offset in 0usize..120) {
            let token = encode_token(offset);
            let a = paginate(numbers(len), size, &token).unwrap();
            let b = paginate(numbers(len), size, &token).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_page_never_exceeds_size(len in 0usize..100, size in 1usize..20, offset in 0usize..120) {
            let page = paginate(numbers(len), size, &encode_token(offset)).unwrap();
            prop_assert!(page.len() <= size);
        }
    }
}
