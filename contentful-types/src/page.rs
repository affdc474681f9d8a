use crate::DecodingError;
use serde::{Deserialize, Serialize};

/// Pagination position for list requests and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    pub items_per_page: u64,
    /// Zero-based page index.
    pub current_page: u64,
    /// Total items the server holds for the query. Zero on outgoing pages.
    pub total_items_available: u64,
}

impl Page {
    #[must_use]
    pub const fn new(items_per_page: u64, current_page: u64, total_items_available: u64) -> Self {
        Self {
            items_per_page,
            current_page,
            total_items_available,
        }
    }

    /// The first page at the given size.
    #[must_use]
    pub const fn first(items_per_page: u64) -> Self {
        Self::new(items_per_page, 0, 0)
    }

    /// Number of items skipped before this page.
    #[must_use]
    pub const fn skip(&self) -> u64 {
        self.items_per_page.saturating_mul(self.current_page)
    }

    /// The following page, if the server reported more items past this one.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        let seen = self.skip().saturating_add(self.items_per_page);
        (self.items_per_page > 0 && seen < self.total_items_available).then(|| Self {
            current_page: self.current_page + 1,
            ..*self
        })
    }
}

/// A row of a list response that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    /// Position within the response's `items` array.
    pub index: usize,
    pub error: DecodingError,
}

/// The decoded rows of one list response.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    /// Successfully decoded rows, in response order.
    pub items: Vec<T>,
    /// Failed rows, in response order.
    pub failures: Vec<FailedItem>,
    pub page: Page,
}

impl<T> PagedResult<T> {
    /// Original indices of the rows that failed.
    pub fn failed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.failures.iter().map(|failure| failure.index)
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total rows in the response, decoded or not.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.items.len() + self.failures.len()
    }
}
