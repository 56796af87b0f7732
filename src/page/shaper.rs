//! Page shaping over ordered result sets

use crate::error::{Error, Result};
use serde::Serialize;

/// Page number used when the caller does not specify one
pub const DEFAULT_PAGE: usize = 1;

/// One fixed-size view into an ordered result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The records on this page, in source order
    pub items: Vec<T>,
    /// Length of the full result set, not of this page
    pub total: usize,
}

impl<T> Page<T> {
    /// Check if this page carries no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shape one page out of a full ordered result set.
///
/// `total` is the length of `items` regardless of the requested page. The
/// slice `[(page-1)*page_size, page*page_size)` is clipped to bounds; a page
/// beyond the last one yields an empty `items` with the total still reported.
///
/// Page numbers are 1-based. A zero `page` or `page_size` is rejected with
/// [`Error::InvalidArgument`].
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page == 0 {
        return Err(Error::invalid_argument("page must be positive"));
    }
    if page_size == 0 {
        return Err(Error::invalid_argument("page size must be positive"));
    }

    let total = items.len();
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);

    let slice = if start >= total {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Ok(Page {
        items: slice,
        total,
    })
}

/// Resolve a raw `page` query value to a usable page number.
///
/// Absent means [`DEFAULT_PAGE`]; an explicit non-positive value is rejected
/// with [`Error::InvalidArgument`].
pub fn resolve_page(raw: Option<i64>) -> Result<usize> {
    match raw {
        None => Ok(DEFAULT_PAGE),
        Some(n) if n > 0 => Ok(n as usize),
        Some(n) => Err(Error::invalid_argument(format!(
            "page must be positive, got {n}"
        ))),
    }
}
