// SPDX-License-Identifier: MPL-2.0
use page_lens::config;
use page_lens::document::{self, AssetSource, PageCount};
use page_lens::error::Error;
use page_lens::i18n::fluent::I18n;
use page_lens::ui::viewer::component::{Content, Effect, Message, State, ViewerConfig};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const PAGE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="210" height="297">
    <rect width="210" height="297" fill="white"/>
</svg>"#;

fn write_pages(dir: &Path, pages: &[u32]) {
    for page in pages {
        fs::write(dir.join(format!("{page:03}.svg")), PAGE_SVG).expect("failed to write page");
    }
}

fn viewer_for(dir: &Path, total: u32) -> State {
    State::new(ViewerConfig {
        total_pages: PageCount::new(total),
        asset_source: AssetSource::Directory(dir.to_path_buf()),
        swipe_threshold: 50.0,
        page_number_width: 3,
    })
}

/// Runs the fetch the viewer would have scheduled for its pending page and
/// feeds the outcome back in.
async fn settle_pending(viewer: &mut State) -> Effect {
    let page = viewer.pending_page().expect("a page should be pending");
    let source = viewer.config().asset_source.clone();
    let width = viewer.config().page_number_width;
    let result = document::load_page(source, page, width).await;
    viewer.handle_message(Message::PageLoaded { page, result }).0
}

#[tokio::test]
async fn navigates_through_pages_on_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    write_pages(dir.path(), &[1, 2, 3]);

    let mut viewer = viewer_for(dir.path(), 3);
    let _ = viewer.start();
    settle_pending(&mut viewer).await;
    assert_eq!(viewer.current_page().value(), 1);

    let _ = viewer.request_next();
    settle_pending(&mut viewer).await;
    let _ = viewer.request_next();
    settle_pending(&mut viewer).await;
    assert_eq!(viewer.current_page().value(), 3);
    assert!(!viewer.has_next());

    let _ = viewer.request_next();
    assert!(!viewer.is_busy());
}

#[tokio::test]
async fn missing_page_leaves_viewer_usable() {
    let dir = tempdir().expect("failed to create temp dir");
    write_pages(dir.path(), &[1, 2]);

    let mut viewer = viewer_for(dir.path(), 604);
    let _ = viewer.start();
    settle_pending(&mut viewer).await;

    let _ = viewer.request_page(5);
    let effect = settle_pending(&mut viewer).await;

    assert!(matches!(effect, Effect::PageLoadFailed(page) if page.value() == 5));
    assert!(matches!(viewer.content(), Content::Failed(page) if page.value() == 5));
    assert_eq!(viewer.current_page().value(), 1);
    assert!(!viewer.is_busy());

    let _ = viewer.request_page(2);
    settle_pending(&mut viewer).await;
    assert_eq!(viewer.current_page().value(), 2);
}

#[tokio::test]
async fn corrupt_page_is_a_load_failure() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("001.svg"), "not an svg").expect("failed to write page");

    let result = document::load_page(
        AssetSource::Directory(dir.path().to_path_buf()),
        PageCount::new(1).first(),
        3,
    )
    .await;

    assert!(matches!(result, Err(Error::Svg(_))));
}

#[test]
fn out_of_range_entry_never_touches_the_source() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut viewer = viewer_for(dir.path(), 604);

    let (effect, _) = viewer.request_page_from_input("700");

    assert_eq!(effect, Effect::PageOutOfRange { min: 1, max: 604 });
    assert!(!viewer.is_busy());
    assert_eq!(viewer.current_page().value(), 1);
}

#[test]
fn settings_file_drives_viewer_and_locale() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
language = "fr"

[document]
asset_root = "https://pages.example.org/mushaf/"
total_pages = 30
page_number_width = 4

[navigation]
swipe_threshold_px = 80.0
"#,
    )
    .expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let viewer_config = ViewerConfig::from_config(&config);
    assert_eq!(viewer_config.total_pages.value(), 30);
    assert_eq!(viewer_config.page_number_width, 4);
    assert_eq!(viewer_config.swipe_threshold, 80.0);
    assert_eq!(
        viewer_config
            .asset_source
            .locate(viewer_config.total_pages.first(), viewer_config.page_number_width),
        "https://pages.example.org/mushaf/0001.svg"
    );

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn broken_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("settings.toml"), "[document\ntotal_pages = ")
        .expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, config::Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(
        ViewerConfig::from_config(&config).total_pages.value(),
        config::DEFAULT_TOTAL_PAGES
    );
}

#[test]
fn every_locale_formats_the_range_warning() {
    let config = config::Config::default();
    for locale in ["en-US", "ar", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &config);
        let text = i18n.tr_with_args(
            "notification-page-out-of-range",
            &[("min", "1"), ("max", "604")],
        );
        assert!(text.contains("604"), "{locale}: {text}");
        assert!(!text.starts_with("MISSING"), "{locale}: {text}");
    }
}
