// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`viewer`] - The page viewer and its sub-components
//! - [`notifications`] - Toasts for failures and rejected input
//! - [`widgets`] - Custom widgets (loading spinner)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
