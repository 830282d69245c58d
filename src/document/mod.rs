// SPDX-License-Identifier: MPL-2.0
//! Paginated document model.
//!
//! A document is a fixed number of pages, each published as its own SVG file
//! named after its zero-padded page number (`001.svg`, `002.svg`, ...).

pub mod source;

pub use source::{load_page, AssetSource, PageAsset};

use std::fmt;

/// Number of pages in a document, guaranteed to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCount(u32);

impl PageCount {
    /// Creates a page count, raising zero to one.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Validates a raw page index against this document.
    ///
    /// Returns `None` for anything outside `[1, count]`.
    #[must_use]
    pub fn page(self, index: i64) -> Option<PageNumber> {
        if index >= 1 && index <= i64::from(self.0) {
            u32::try_from(index).ok().map(PageNumber)
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(self) -> PageNumber {
        PageNumber(1)
    }

    #[must_use]
    pub fn last(self) -> PageNumber {
        PageNumber(self.0)
    }
}

/// A 1-based page index that is valid for the document it was created from.
///
/// Only [`PageCount::page`] and its helpers hand these out, so holding one
/// means the bounds check already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// The page before this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<PageNumber> {
        (self.0 > 1).then(|| PageNumber(self.0 - 1))
    }

    /// The page after this one, if it is still inside `count`.
    #[must_use]
    pub fn next(self, count: PageCount) -> Option<PageNumber> {
        (self.0 < count.value()).then(|| PageNumber(self.0 + 1))
    }

    /// Asset file name for this page, e.g. `007.svg` for width 3.
    ///
    /// Numbers wider than `width` are kept whole.
    #[must_use]
    pub fn file_name(self, width: usize, extension: &str) -> String {
        format!("{:0width$}.{}", self.0, extension, width = width)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_count_is_raised_to_one() {
        assert_eq!(PageCount::new(0).value(), 1);
    }

    #[test]
    fn page_accepts_only_indices_in_range() {
        let count = PageCount::new(604);
        assert_eq!(count.page(1).map(PageNumber::value), Some(1));
        assert_eq!(count.page(604).map(PageNumber::value), Some(604));
        assert!(count.page(0).is_none());
        assert!(count.page(-3).is_none());
        assert!(count.page(605).is_none());
        assert!(count.page(i64::MAX).is_none());
    }

    #[test]
    fn previous_and_next_stop_at_bounds() {
        let count = PageCount::new(3);
        assert!(count.first().previous().is_none());
        assert!(count.last().next(count).is_none());
        assert_eq!(count.first().next(count), count.page(2));
        assert_eq!(count.last().previous(), count.page(2));
    }

    #[test]
    fn file_name_is_zero_padded() {
        let count = PageCount::new(604);
        let page = count.page(7).unwrap();
        assert_eq!(page.file_name(3, "svg"), "007.svg");
        assert_eq!(count.page(604).unwrap().file_name(3, "svg"), "604.svg");
    }

    #[test]
    fn file_name_does_not_truncate_wide_numbers() {
        let count = PageCount::new(2000);
        assert_eq!(count.page(1234).unwrap().file_name(3, "svg"), "1234.svg");
    }
}
