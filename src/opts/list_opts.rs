//! Filter parameters for listing invoices: page, page size, free-text
//! search, and sort order. `ListOptsPatch` carries a partial change;
//! applying a patch that does not explicitly navigate to a page starts
//! a new query on page 1.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => write!(f, "asc"),
            SortDir::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOpts {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl Default for ListOpts {
    fn default() -> ListOpts {
        ListOpts {
            page: DEFAULT_PAGE_NUM,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            sort_by: None,
            sort_dir: None,
        }
    }
}

impl ListOpts {
    /// Merge a partial change into these opts. Any patch that does not
    /// explicitly carry a page lands back on page 1, so the caller only
    /// stays deep in the listing when navigating on purpose.
    pub fn apply(&self, patch: &ListOptsPatch) -> ListOpts {
        ListOpts {
            page: patch.page.unwrap_or(DEFAULT_PAGE_NUM).max(1),
            limit: valid_limit(patch.limit.unwrap_or(self.limit)),
            search: match &patch.search {
                Some(search) => search.clone(),
                None => self.search.clone(),
            },
            sort_by: match &patch.sort_by {
                Some(sort_by) => sort_by.clone(),
                None => self.sort_by.clone(),
            },
            sort_dir: match patch.sort_dir {
                Some(sort_dir) => sort_dir,
                None => self.sort_dir,
            },
        }
    }

    /// Query string with exactly the defined fields. `page` and `limit`
    /// always have values; the optional fields are omitted when unset.
    pub fn query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &self.page.to_string());
        query.append_pair("limit", &self.limit.to_string());
        if let Some(search) = &self.search {
            query.append_pair("search", search);
        }
        if let Some(sort_by) = &self.sort_by {
            query.append_pair("sort_by", sort_by);
        }
        if let Some(sort_dir) = &self.sort_dir {
            query.append_pair("sort_dir", &sort_dir.to_string());
        }
        query.finish()
    }
}

// The server falls back to the default for out-of-range limits, mirror
// that so the page size we report matches what it actually used
fn valid_limit(limit: usize) -> usize {
    if limit < 1 || limit > MAX_PAGE_SIZE {
        DEFAULT_PAGE_SIZE
    } else {
        limit
    }
}

/// A partial change to `ListOpts`. `None` leaves a field untouched; the
/// optional fields use a nested `Option` so a patch can also clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptsPatch {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<Option<String>>,
    pub sort_by: Option<Option<String>>,
    pub sort_dir: Option<Option<SortDir>>,
}

impl ListOptsPatch {
    pub fn with_page(mut self, page: usize) -> ListOptsPatch {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> ListOptsPatch {
        self.limit = Some(limit);
        self
    }

    /// Set the search term. Empty or whitespace-only input clears the
    /// filter instead of sending an empty parameter.
    pub fn with_search(mut self, search: impl AsRef<str>) -> ListOptsPatch {
        let search = search.as_ref().trim();
        self.search = if search.is_empty() {
            Some(None)
        } else {
            Some(Some(search.to_string()))
        };
        self
    }

    pub fn with_sort(mut self, sort_by: impl AsRef<str>, sort_dir: SortDir) -> ListOptsPatch {
        self.sort_by = Some(Some(sort_by.as_ref().to_string()));
        self.sort_dir = Some(Some(sort_dir));
        self
    }

    pub fn clear_sort(mut self) -> ListOptsPatch {
        self.sort_by = Some(None);
        self.sort_dir = Some(None);
        self
    }
}
