//! Page requests and page results.
//!
//! Pages are 1-indexed. A missing, non-numeric or zero `page`/`per_page`
//! falls back to the default rather than failing the request. `per_page` is
//! capped at [`MAX_PER_PAGE`] and `page` at [`MAX_PAGE`], so the row offset
//! always fits a Postgres `BIGINT`.

use serde::Serialize;

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const DEFAULT_PAGE: u64 = 1;
pub const MAX_PER_PAGE: u64 = 100;
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PER_PAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGE),
            per_page: if per_page == 0 {
                DEFAULT_PER_PAGE
            } else {
                per_page.min(MAX_PER_PAGE)
            },
        }
    }

    /// Builds a request from raw `page` / `per_page` query values.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, default: u64| {
            raw.and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };
        Self::new(parse(page, DEFAULT_PAGE), parse(per_page, DEFAULT_PER_PAGE))
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// One page of results together with the total row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }

    /// Slices an already-filtered, already-ordered collection.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.per_page as usize)
            .collect();
        Self::new(items, total, request)
    }

    /// Last page number; an empty result still has page 1.
    pub fn last_page(&self) -> u64 {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
