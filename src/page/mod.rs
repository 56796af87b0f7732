//! Pagination module
//!
//! Turns a full ordered result set into one fixed-size page plus the total
//! count. Listing and search endpoints share this shaper.
//!
//! # Overview
//!
//! [`paginate`] is a pure function of its inputs: it never mutates the source
//! sequence and the same `(items, page, page_size)` always yields the same
//! page. A page number past the end of the collection produces an empty page
//! with the true total, not an error.

mod shaper;

pub use shaper::{paginate, resolve_page, Page, DEFAULT_PAGE};

#[cfg(test)]
mod tests;
