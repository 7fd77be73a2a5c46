//! Filter normalisation and the paginated response envelope shared by the
//! product and category listings.

use serde::Serialize;

/// Page size used when the caller asks for a page without a limit.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Slicing requested by a list call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageRequest {
    #[default]
    /// Neither `page` nor `limit` supplied: every match is returned as one page.
    Unpaginated,
    /// One-based page of at most `limit` rows.
    Paginated { page: usize, limit: usize },
}

impl PageRequest {
    /// Builds a page request from raw query values.
    ///
    /// Non-numeric values count as absent, values `<= 0` are clamped to `1`.
    /// If at least one of the two is present the missing one takes its
    /// default (`page = 1`, `limit = default_limit`).
    pub fn resolve(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        match (parse_positive(page), parse_positive(limit)) {
            (None, None) => Self::Unpaginated,
            (page, limit) => Self::Paginated {
                page: page.unwrap_or(1),
                limit: limit.unwrap_or(default_limit).max(1),
            },
        }
    }

    /// Offset and row count to apply to the data query, if any.
    pub fn offset_limit(&self) -> Option<(i64, i64)> {
        match *self {
            Self::Unpaginated => None,
            Self::Paginated { page, limit } => {
                let offset = page.saturating_sub(1).saturating_mul(limit);
                Some((saturating_i64(offset), saturating_i64(limit)))
            }
        }
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Parses a page or limit query value.
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let value = raw?.trim().parse::<i64>().ok()?;
    if value <= 0 {
        Some(1)
    } else {
        Some(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

/// Parses an identifier filter such as `categoriaId`; anything that is not a
/// positive integer counts as absent.
pub fn parse_id_filter(raw: Option<&str>) -> Option<i32> {
    raw?.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Trims the search term, treating blank input as no search at all.
pub fn normalize_search(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Response envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Assembles the envelope for `data`, one slice out of `total` matches.
    ///
    /// An unpaginated request reports `page = 1`, `limit = total` and a single
    /// page. A paginated request with zero matches still reports one (empty)
    /// page.
    pub fn new(data: Vec<T>, total: usize, request: PageRequest) -> Self {
        match request {
            PageRequest::Unpaginated => Self {
                data,
                total,
                page: 1,
                limit: total,
                total_pages: 1,
            },
            PageRequest::Paginated { page, limit } => {
                let limit = limit.max(1);
                Self {
                    data,
                    total,
                    page,
                    limit,
                    total_pages: total.div_ceil(limit).max(1),
                }
            }
        }
    }

    /// Converts every item while keeping the pagination metadata.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
