//! Pagination envelope shared by list endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata for a result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-based page number actually served
    pub page: u32,

    /// Page size actually served
    pub page_size: u32,

    /// Total count of rows matching the predicate, ignoring pagination
    pub total: u64,

    /// `ceil(total / page_size)`
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page,
            page_size,
            total,
            total_pages: total.div_ceil(page_size as u64),
        }
    }
}

/// One page of results plus its pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}
