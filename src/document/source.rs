// SPDX-License-Identifier: MPL-2.0
//! Page asset retrieval.
//!
//! Assets are fetched on demand, one page at a time, and never cached: every
//! navigation goes back to the source.

use super::PageNumber;
use crate::config::PAGE_ASSET_EXTENSION;
use crate::error::{Error, HttpError, Result};
use iced::widget::svg;
use resvg::usvg;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const USER_AGENT: &str = concat!("PageLens/", env!("CARGO_PKG_VERSION"));

/// Where page assets are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// `http://` or `https://` base URL, without trailing slash.
    Remote(String),
    /// Local directory containing the page files.
    Directory(PathBuf),
}

impl AssetSource {
    /// Interprets a configured asset root.
    ///
    /// Anything starting with `http://` or `https://` is fetched over the
    /// network; everything else is treated as a filesystem path.
    #[must_use]
    pub fn from_root(root: &str) -> Self {
        let trimmed = root.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(trimmed.trim_end_matches('/').to_string())
        } else {
            Self::Directory(PathBuf::from(trimmed))
        }
    }

    /// Full location of a page asset, used for fetching and logging.
    #[must_use]
    pub fn locate(&self, page: PageNumber, width: usize) -> String {
        let file_name = page.file_name(width, PAGE_ASSET_EXTENSION);
        match self {
            Self::Remote(base) => format!("{}/{}", base, file_name),
            Self::Directory(dir) => dir.join(file_name).to_string_lossy().into_owned(),
        }
    }
}

/// A fetched and validated page, ready to be shown in the viewport.
#[derive(Debug, Clone)]
pub struct PageAsset {
    page: PageNumber,
    handle: svg::Handle,
}

impl PageAsset {
    /// Parses SVG bytes for `page`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] when the data is not a usable SVG document.
    pub fn from_svg_bytes(page: PageNumber, bytes: Vec<u8>) -> Result<Self> {
        let tree = usvg::Tree::from_data(&bytes, &usvg::Options::default())?;
        let size = tree.size();
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        Ok(Self {
            page,
            handle: svg::Handle::from_memory(bytes),
        })
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn handle(&self) -> &svg::Handle {
        &self.handle
    }
}

/// Fetches and validates the asset for `page`.
///
/// # Errors
///
/// - [`Error::Http`] for transport failures and non-success statuses
/// - [`Error::Io`] when a local page file cannot be read
/// - [`Error::Svg`] when the payload is not a valid SVG
pub async fn load_page(source: AssetSource, page: PageNumber, width: usize) -> Result<PageAsset> {
    let location = source.locate(page, width);
    log::debug!("fetching page {} from {}", page, location);

    let bytes = match &source {
        AssetSource::Remote(_) => fetch_remote(&location).await?,
        AssetSource::Directory(_) => read_local(Path::new(&location)).await?,
    };

    PageAsset::from_svg_bytes(page, bytes)
}

/// Client shared by every remote fetch, built on first use.
fn http_client() -> Result<&'static reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| HttpError::Transport(e.to_string()))?;
    Ok(CLIENT.get_or_init(|| client))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = http_client()?
        .get(url)
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(HttpError::Status(response.status().as_u16()).into());
    }

    let body = response.bytes().await?;
    Ok(body.to_vec())
}

async fn read_local(path: &Path) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageCount;
    use std::fs;
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const SAMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="60" height="90">
        <rect width="60" height="90" fill="white"/>
    </svg>"#;

    fn page(n: i64) -> PageNumber {
        PageCount::new(604).page(n).unwrap()
    }

    #[test]
    fn http_roots_are_remote() {
        assert_eq!(
            AssetSource::from_root("https://cdn.example.org/pages/"),
            AssetSource::Remote("https://cdn.example.org/pages".to_string())
        );
        assert!(matches!(
            AssetSource::from_root("HTTP://host/x"),
            AssetSource::Remote(_)
        ));
    }

    #[test]
    fn other_roots_are_directories() {
        assert_eq!(
            AssetSource::from_root("svg"),
            AssetSource::Directory(PathBuf::from("svg"))
        );
    }

    #[test]
    fn remote_location_uses_padded_file_name() {
        let source = AssetSource::from_root("https://cdn.example.org/pages");
        assert_eq!(
            source.locate(page(5), 3),
            "https://cdn.example.org/pages/005.svg"
        );
    }

    #[test]
    fn directory_location_joins_file_name() {
        let source = AssetSource::Directory(PathBuf::from("assets"));
        let expected = Path::new("assets").join("042.svg");
        assert_eq!(source.locate(page(42), 3), expected.to_string_lossy());
    }

    #[test]
    fn valid_svg_is_accepted() {
        let asset = PageAsset::from_svg_bytes(page(1), SAMPLE_SVG.as_bytes().to_vec())
            .expect("svg should parse");
        assert_eq!(asset.page(), page(1));
    }

    #[test]
    fn svg_without_area_is_rejected() {
        let empty = br#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="10"/>"#;
        assert!(PageAsset::from_svg_bytes(page(1), empty.to_vec()).is_err());
    }

    #[test]
    fn invalid_svg_is_rejected() {
        match PageAsset::from_svg_bytes(page(1), b"<svg>oops".to_vec()) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_page_reads_from_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("003.svg"), SAMPLE_SVG).expect("write page");

        let source = AssetSource::Directory(temp_dir.path().to_path_buf());
        let asset = load_page(source, page(3), 3).await.expect("page should load");
        assert_eq!(asset.page(), page(3));
    }

    #[tokio::test]
    async fn load_page_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let source = AssetSource::Directory(temp_dir.path().to_path_buf());
        let result = load_page(source, page(9), 3).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_page_unreachable_host_is_transport_error() {
        // Port 9 on localhost is discard; nothing listens there in test environments.
        let source = AssetSource::from_root("http://127.0.0.1:9");
        let result = load_page(source, page(1), 3).await;
        assert!(matches!(
            result,
            Err(Error::Http(HttpError::Transport(_)))
        ));
    }

    /// Answers a single HTTP request and hands back its request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind listener");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (base, server)
    }

    #[tokio::test]
    async fn load_page_http_error_status_is_reported() {
        let (base, server) = serve_once("404 Not Found", "").await;

        let result = load_page(AssetSource::from_root(&base), page(5), 3).await;

        assert!(matches!(result, Err(Error::Http(HttpError::Status(404)))));
        assert_eq!(server.await.expect("server task"), "GET /005.svg HTTP/1.1");
    }

    #[tokio::test]
    async fn load_page_fetches_over_http() {
        let (base, server) = serve_once("200 OK", SAMPLE_SVG).await;

        let asset = load_page(AssetSource::from_root(&base), page(12), 4)
            .await
            .expect("page should load");

        assert_eq!(asset.page(), page(12));
        assert_eq!(server.await.expect("server task"), "GET /0012.svg HTTP/1.1");
    }

    #[tokio::test]
    async fn http_client_is_shared() {
        let first = http_client().expect("client");
        let second = http_client().expect("client");
        assert!(std::ptr::eq(first, second));
    }
}
