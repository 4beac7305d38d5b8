use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_NUM;

/// List metadata as the server reports it. `total_pages` is
/// ceil(total / limit); the sort fields echo the request when present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
}

impl Pagination {
    pub fn empty(limit: usize) -> Pagination {
        Pagination {
            total: 0,
            page: DEFAULT_PAGE_NUM,
            limit,
            total_pages: 1,
            sort_by: None,
            sort_dir: None,
        }
    }
}
