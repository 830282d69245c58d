// SPDX-License-Identifier: MPL-2.0
//! Single-page document viewer.
//!
//! ```text
//! component.rs (orchestrator, owns the page state)
//!     ├── gesture     - swipe detection
//!     ├── loading     - spinner state
//!     ├── page_entry  - direct page entry dialog
//!     ├── navbar      - previous / indicator / next
//!     └── pane        - viewport
//! ```

pub mod component;
pub mod gesture;
pub mod loading;
pub mod navbar;
pub mod page_entry;
pub mod pane;
