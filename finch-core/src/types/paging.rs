//! Pagination parameters.
//!
//! The host platform treats zero as "unset", so `Some(0)` and `None` both
//! resolve to the defaults: page 1, twenty entries per page.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Caller-supplied pagination, possibly unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// 1-based page number; `None` or zero means the first page.
    pub page: Option<u32>,
    /// Entries per page; `None` or zero means [`DEFAULT_PAGE_SIZE`].
    pub count: Option<u32>,
}

impl Paging {
    /// Creates paging with both fields set.
    pub fn new(page: u32, count: u32) -> Self {
        Self {
            page: Some(page),
            count: Some(count),
        }
    }

    /// Creates paging with only the page set.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            count: None,
        }
    }

    /// Applies the defaults, yielding concrete values for the upstream call.
    pub fn resolve(self) -> ResolvedPaging {
        ResolvedPaging {
            page: self.page.filter(|p| *p != 0).unwrap_or(DEFAULT_PAGE),
            count: self.count.filter(|c| *c != 0).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Pagination after defaulting; what the upstream client actually sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedPaging {
    /// 1-based page number.
    pub page: u32,
    /// Entries per page.
    pub count: u32,
}

impl Default for ResolvedPaging {
    fn default() -> Self {
        Paging::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, None, 1, 20 ; "both unset")]
    #[test_case(Some(0), Some(0), 1, 20 ; "both zero")]
    #[test_case(Some(3), None, 3, 20 ; "page only")]
    #[test_case(None, Some(50), 1, 50 ; "count only")]
    #[test_case(Some(2), Some(10), 2, 10 ; "both set")]
    fn test_resolve(page: Option<u32>, count: Option<u32>, want_page: u32, want_count: u32) {
        let resolved = Paging { page, count }.resolve();
        assert_eq!(resolved.page, want_page);
        assert_eq!(resolved.count, want_count);
    }

    #[test]
    fn test_default_resolved() {
        let resolved = ResolvedPaging::default();
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.count, 20);
    }
}
