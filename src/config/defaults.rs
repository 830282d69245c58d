// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Document**: Asset root, page count, file name padding
//! - **Navigation**: Swipe gesture threshold

// ==========================================================================
// Document Defaults
// ==========================================================================

/// Default asset root, resolved relative to the working directory.
pub const DEFAULT_ASSET_ROOT: &str = "svg";

/// Default number of pages in the document.
pub const DEFAULT_TOTAL_PAGES: u32 = 604;

/// Smallest document the viewer accepts.
pub const MIN_TOTAL_PAGES: u32 = 1;

/// Default number of digits page file names are zero-padded to (`007.svg`).
pub const DEFAULT_PAGE_NUMBER_WIDTH: usize = 3;

/// Minimum page file name padding.
pub const MIN_PAGE_NUMBER_WIDTH: usize = 1;

/// Maximum page file name padding. Wider page numbers are written in full.
pub const MAX_PAGE_NUMBER_WIDTH: usize = 9;

/// File extension of page assets.
pub const PAGE_ASSET_EXTENSION: &str = "svg";

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Horizontal displacement (logical pixels) a swipe must exceed to turn the page.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOTAL_PAGES > 0);
    assert!(DEFAULT_TOTAL_PAGES >= MIN_TOTAL_PAGES);

    assert!(MIN_PAGE_NUMBER_WIDTH > 0);
    assert!(MAX_PAGE_NUMBER_WIDTH >= MIN_PAGE_NUMBER_WIDTH);
    assert!(DEFAULT_PAGE_NUMBER_WIDTH >= MIN_PAGE_NUMBER_WIDTH);
    assert!(DEFAULT_PAGE_NUMBER_WIDTH <= MAX_PAGE_NUMBER_WIDTH);

    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_defaults_are_valid() {
        assert_eq!(DEFAULT_TOTAL_PAGES, 604);
        assert_eq!(DEFAULT_PAGE_NUMBER_WIDTH, 3);
        assert_eq!(PAGE_ASSET_EXTENSION, "svg");
    }

    #[test]
    fn swipe_threshold_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    }
}
