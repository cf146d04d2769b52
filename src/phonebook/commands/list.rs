use crate::index::{index_records, DisplayRecord};
use crate::model::Record;
use std::num::NonZeroUsize;

/// One window of the phonebook, ready for the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub total_pages: usize,
    pub rows: Vec<DisplayRecord>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Number of pages needed for `len` records. An empty phonebook has zero pages.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    if len == 0 {
        0
    } else {
        (len - 1) / page_size.get() + 1
    }
}

/// Slices out the 1-based `page`. Pages past the end (and page 0) are empty.
pub fn page(records: &[Record], page: usize, page_size: NonZeroUsize) -> Page {
    let page_size_n = page_size.get();
    let rows = match page.checked_sub(1) {
        Some(zero_based) => {
            let start = zero_based.saturating_mul(page_size_n).min(records.len());
            let end = start.saturating_add(page_size_n).min(records.len());
            index_records(&records[start..end], start + 1)
        }
        None => Vec::new(),
    };

    Page {
        number: page,
        total_pages: total_pages(records.len(), page_size),
        rows,
    }
}
