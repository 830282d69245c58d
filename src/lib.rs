// SPDX-License-Identifier: MPL-2.0
//! `page_lens` is a single-page document viewer built with the Iced GUI framework.
//!
//! A document is a fixed number of pages, one SVG file per page, served from
//! a local directory or an HTTP(S) base URL. The viewer shows one page at a
//! time and navigates by button, keyboard, swipe, or direct page entry.

#![doc(html_root_url = "https://docs.rs/page_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod ui;
