/// Synchronous loader for the **global monthly temperature** document.
///
/// The endpoint serves a single JSON object:
/// `{ "baseTemperature": 8.66, "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }, ...] }`
///
/// ### Notes
/// - One GET per load; the first failure is terminal (no retry).
/// - No total request timeout unless one is configured.
/// - Months arrive 1-based and are re-based by `normalize`.
///
/// Typical usage:
/// ```no_run
/// # use temp_heatmap::api::{Client, DEFAULT_SOURCE_URL};
/// let client = Client::new(DEFAULT_SOURCE_URL, None)?;
/// let dataset = client.fetch()?;
/// println!("{} readings", dataset.len());
/// # Ok::<(), temp_heatmap::HeatmapError>(())
/// ```
use crate::error::{HeatmapError, Result};
use crate::models::{Dataset, TemperaturePayload};
use crate::normalize::normalize;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Client {
    /// Build a client for `url`. `timeout` bounds the whole request when set.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout) // blocking default is 30s; None disables it
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("temp_heatmap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// GET and decode the raw document.
    ///
    /// ### Errors
    /// - `Network` when the request cannot be sent or the body cannot be read
    /// - `Http` for any non-success status
    /// - `Parse` when the body is not the expected JSON shape
    pub fn fetch_payload(&self) -> Result<TemperaturePayload> {
        log::info!("GET {}", self.url);
        let resp = self.http.get(&self.url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HeatmapError::Http(status));
        }
        let body = resp.text()?;
        log::debug!("received {} bytes", body.len());
        parse_payload(&body)
    }

    /// Fetch and normalize.
    pub fn fetch(&self) -> Result<Dataset> {
        normalize(self.fetch_payload()?)
    }
}

/// Decode the document from text.
pub fn parse_payload(text: &str) -> Result<TemperaturePayload> {
    Ok(serde_json::from_str(text)?)
}

/// Read, decode and normalize a document saved on disk.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    log::info!("reading {}", path.display());
    let text = std::fs::read_to_string(path)?;
    normalize(parse_payload(&text)?)
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Remote(DEFAULT_SOURCE_URL.to_string())
    }
}

impl DataSource {
    pub fn load(&self, timeout: Option<Duration>) -> Result<Dataset> {
        match self {
            DataSource::Remote(url) => Client::new(url.clone(), timeout)?.fetch(),
            DataSource::File(path) => load_file(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Remote(url) => url.clone(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}
