// SPDX-License-Identifier: MPL-2.0
//! Page viewer component: current page, the single in-flight load, and the
//! input that drives navigation.
//!
//! The viewer is either idle or loading exactly one page. Requests that
//! arrive while a page is loading are dropped, never queued, and the current
//! page only changes when the pending load succeeds.

use crate::config::Config;
use crate::document::{self, AssetSource, PageAsset, PageCount, PageNumber};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ColorScheme;
use crate::ui::viewer::gesture::{SwipeDirection, SwipeTracker};
use crate::ui::viewer::{loading, navbar, page_entry, pane};
use iced::keyboard::key::Named;
use iced::widget::{Column, Stack};
use iced::{event, keyboard, mouse, touch, window, Element, Length, Point, Task};

/// Everything the viewer needs to know about the document it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub total_pages: PageCount,
    pub asset_source: AssetSource,
    /// Minimum horizontal travel, in logical pixels, for a swipe.
    pub swipe_threshold: f32,
    /// Digits page numbers are padded to in asset names.
    pub page_number_width: usize,
}

impl ViewerConfig {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            total_pages: PageCount::new(config.document.total_pages()),
            asset_source: AssetSource::from_root(config.document.asset_root()),
            swipe_threshold: config.navigation.swipe_threshold_px(),
            page_number_width: config.document.page_number_width(),
        }
    }
}

/// What the viewport currently shows.
#[derive(Debug, Clone, Default)]
pub enum Content {
    /// Nothing has loaded yet.
    #[default]
    Empty,
    Page(PageAsset),
    /// The last load failed; carries the page that was asked for.
    Failed(PageNumber),
}

#[derive(Debug, Clone)]
pub enum Message {
    PreviousPressed,
    NextPressed,
    IndicatorPressed,
    PageEntry(page_entry::Message),
    PageLoaded {
        page: PageNumber,
        result: Result<PageAsset, Error>,
    },
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    SpinnerTick,
}

/// Outcomes the application shell reacts to (toasts, title).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    PageLoaded(PageNumber),
    PageLoadFailed(PageNumber),
    /// Direct entry was not a page of this document.
    PageOutOfRange { min: u32, max: u32 },
}

/// Environment the view borrows from the application.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub struct State {
    config: ViewerConfig,
    current_page: PageNumber,
    /// Page being fetched. `Some` means busy.
    pending: Option<PageNumber>,
    content: Content,
    loading: loading::State,
    page_entry: page_entry::State,
    swipe: SwipeTracker,
    cursor_position: Option<Point>,
}

impl State {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            current_page: config.total_pages.first(),
            pending: None,
            content: Content::Empty,
            loading: loading::State::default(),
            page_entry: page_entry::State::default(),
            swipe: SwipeTracker::new(config.swipe_threshold),
            cursor_position: None,
            config,
        }
    }

    /// Loads the first page. Called once at startup.
    pub fn start(&mut self) -> Task<Message> {
        self.request_page(i64::from(self.config.total_pages.first().value()))
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> PageCount {
        self.config.total_pages
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_page(&self) -> Option<PageNumber> {
        self.pending
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn loading(&self) -> &loading::State {
        &self.loading
    }

    #[must_use]
    pub fn page_entry(&self) -> &page_entry::State {
        &self.page_entry
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page.previous().is_some()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page.next(self.config.total_pages).is_some()
    }

    /// Starts loading page `n`.
    ///
    /// Ignored when `n` is not a page of the document or another load is
    /// still running.
    pub fn request_page(&mut self, n: i64) -> Task<Message> {
        let Some(page) = self.config.total_pages.page(n) else {
            log::debug!("ignoring request for page {} outside document", n);
            return Task::none();
        };
        if let Some(pending) = self.pending {
            log::debug!("ignoring request for page {} while {} loads", page, pending);
            return Task::none();
        }

        log::debug!("requesting page {}", page);
        self.pending = Some(page);
        self.loading.handle(loading::Message::Start);

        let source = self.config.asset_source.clone();
        let width = self.config.page_number_width;
        Task::perform(document::load_page(source, page, width), move |result| {
            Message::PageLoaded { page, result }
        })
    }

    pub fn request_previous(&mut self) -> Task<Message> {
        match self.current_page.previous() {
            Some(page) => self.request_page(i64::from(page.value())),
            None => Task::none(),
        }
    }

    pub fn request_next(&mut self) -> Task<Message> {
        match self.current_page.next(self.config.total_pages) {
            Some(page) => self.request_page(i64::from(page.value())),
            None => Task::none(),
        }
    }

    /// Jumps to the page typed by the user.
    ///
    /// Only the leading integer counts, so `12a` means page 12 and `1.5`
    /// means page 1. Input without leading digits, or a number outside the
    /// document, is rejected with [`Effect::PageOutOfRange`] and the entry
    /// field is reset to the current page.
    pub fn request_page_from_input(&mut self, raw: &str) -> (Effect, Task<Message>) {
        let parsed = parse_leading_integer(raw);

        match parsed.and_then(|n| self.config.total_pages.page(n)) {
            Some(page) => (Effect::None, self.request_page(i64::from(page.value()))),
            None => {
                log::debug!("rejecting page entry {:?}", raw);
                self.page_entry.reset(self.current_page);
                (
                    Effect::PageOutOfRange {
                        min: self.config.total_pages.first().value(),
                        max: self.config.total_pages.last().value(),
                    },
                    Task::none(),
                )
            }
        }
    }

    /// Opens the direct entry dialog.
    pub fn open_page_entry(&mut self) -> Task<Message> {
        self.page_entry
            .open(self.current_page)
            .map(Message::PageEntry)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::PreviousPressed => (Effect::None, self.request_previous()),
            Message::NextPressed => (Effect::None, self.request_next()),
            Message::IndicatorPressed => (Effect::None, self.open_page_entry()),
            Message::PageEntry(entry_message) => match self.page_entry.handle(entry_message) {
                page_entry::Effect::Submit(raw) => {
                    let outcome = self.request_page_from_input(&raw);
                    self.page_entry.close();
                    outcome
                }
                page_entry::Effect::None => (Effect::None, Task::none()),
            },
            Message::PageLoaded { page, result } => (self.settle(page, result), Task::none()),
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::SpinnerTick => {
                self.loading.handle(loading::Message::Tick);
                (Effect::None, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let pane = pane::view(pane::ViewContext {
            i18n: env.i18n,
            content: &self.content,
            is_loading: self.loading.is_loading(),
            spinner_rotation: self.loading.rotation(),
            colors: env.colors,
        });

        let navbar = navbar::view(navbar::ViewContext {
            i18n: env.i18n,
            current: self.current_page,
            total: self.config.total_pages,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            background: env.colors.chrome_background,
        });

        let base = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(pane)
            .push(navbar);

        match self.page_entry.view(env.i18n, self.config.total_pages) {
            Some(dialog) => Stack::new()
                .push(base)
                .push(dialog.map(Message::PageEntry))
                .into(),
            None => base.into(),
        }
    }

    fn settle(&mut self, page: PageNumber, result: Result<PageAsset, Error>) -> Effect {
        if self.pending != Some(page) {
            log::debug!("discarding stale result for page {}", page);
            return Effect::None;
        }
        self.pending = None;
        self.loading.handle(loading::Message::Stop);

        match result {
            Ok(asset) => {
                log::info!("page {} loaded", page);
                self.content = Content::Page(asset);
                self.current_page = page;
                self.page_entry.reset(page);
                Effect::PageLoaded(page)
            }
            Err(error) => {
                log::warn!("page {} failed to load: {}", page, error);
                self.content = Content::Failed(page);
                Effect::PageLoadFailed(page)
            }
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(key)
            }
            event::Event::Touch(touch_event) => {
                let task = self.handle_touch(touch_event);
                (Effect::None, task)
            }
            event::Event::Mouse(mouse_event) => {
                let task = self.handle_mouse(mouse_event);
                (Effect::None, task)
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_key(&mut self, key: keyboard::Key) -> (Effect, Task<Message>) {
        if self.page_entry.is_open() {
            // The field owns the keyboard; only Escape reaches us from it.
            if matches!(key, keyboard::Key::Named(Named::Escape)) {
                self.page_entry.close();
            }
            return (Effect::None, Task::none());
        }

        let task = match key {
            keyboard::Key::Named(Named::ArrowLeft) => self.request_previous(),
            keyboard::Key::Named(Named::ArrowRight) => self.request_next(),
            keyboard::Key::Character(ref c) if c.eq_ignore_ascii_case("g") => {
                self.open_page_entry()
            }
            _ => Task::none(),
        };
        (Effect::None, task)
    }

    fn handle_touch(&mut self, event: touch::Event) -> Task<Message> {
        if self.page_entry.is_open() {
            self.swipe.cancel();
            return Task::none();
        }

        match event {
            touch::Event::FingerPressed { position, .. } => {
                self.swipe.begin(position.x);
                Task::none()
            }
            touch::Event::FingerLifted { position, .. } => self.finish_swipe(position.x),
            touch::Event::FingerLost { .. } => {
                self.swipe.cancel();
                Task::none()
            }
            touch::Event::FingerMoved { .. } => Task::none(),
        }
    }

    fn handle_mouse(&mut self, event: mouse::Event) -> Task<Message> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                Task::none()
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.swipe.cancel();
                Task::none()
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) if !self.page_entry.is_open() => {
                if let Some(position) = self.cursor_position {
                    self.swipe.begin(position.x);
                }
                Task::none()
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => match self.cursor_position {
                Some(position) if !self.page_entry.is_open() => self.finish_swipe(position.x),
                _ => {
                    self.swipe.cancel();
                    Task::none()
                }
            },
            _ => Task::none(),
        }
    }

    fn finish_swipe(&mut self, x: f32) -> Task<Message> {
        match self.swipe.end(x) {
            Some(SwipeDirection::Next) => self.request_next(),
            Some(SwipeDirection::Previous) => self.request_previous(),
            None => Task::none(),
        }
    }
}

/// Reads an optionally signed integer at the start of `raw`, ignoring
/// leading whitespace and anything after the digits.
///
/// Numbers too large for `i64` saturate, which keeps them out of range.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = unsigned[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
