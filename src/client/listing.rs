//! Pagination and search state of the posts list.

use crate::client::api::PostQuery;
use crate::shared::PostPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    page: u32,
    pages: u32,
    query: String,
    limit: Option<u32>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            page: 1,
            pages: 1,
            query: String::new(),
            limit: None,
        }
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed page size instead of the server default
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the search text. A new search always starts from page 1.
    /// Returns whether anything changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query.trim() == self.query.trim() {
            return false;
        }
        self.query = query;
        self.page = 1;
        true
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Record the page count from a fetched page. If the current page is
    /// now past the end (e.g. the last post on the last page was deleted)
    /// it moves to the last page and returns true so the caller refetches.
    pub fn apply(&mut self, page: &PostPage) -> bool {
        self.pages = page.pages.max(1);
        if self.page > self.pages {
            self.page = self.pages;
            return true;
        }
        false
    }

    pub fn to_query(&self) -> PostQuery {
        let q = self.query.trim();
        PostQuery {
            page: Some(self.page),
            limit: self.limit,
            q: (!q.is_empty()).then(|| q.to_string()),
        }
    }
}
