//! HTTP client for the ipgeolocation.io `/ipgeo` endpoint

use tracing::{debug, warn};
use url::Url;

use crate::error::{GeoError, Result};
use crate::model::GeolocationData;
use crate::options::Options;

/// API base URL the query parameters are appended to
pub const BASE_URL: &str = "https://api.ipgeolocation.io/ipgeo";

#[derive(Debug, Clone)]
pub struct Client {
    token: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_http_client(token, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(token: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            token: token.into(),
            base_url: BASE_URL.to_string(),
            http,
        }
    }

    /// Send requests to `base_url` instead of the public endpoint.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        Url::parse(base_url)?;
        self.base_url = base_url.to_string();
        Ok(self)
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up `ip`, or the caller's own address when `ip` is empty.
    ///
    /// The IP is sent as given; use [`Options::set_ip`] for local validation.
    /// See https://ipgeolocation.io/documentation/ip-geolocation-api.html for
    /// the fields to expect.
    pub async fn get_geolocation(&self, ip: &str) -> Result<GeolocationData> {
        let mut params = Vec::with_capacity(1);
        if !ip.is_empty() {
            params.push(("ip", ip.to_string()));
        }
        self.fetch(self.build_url(&params)?).await
    }

    /// Look up with language and field filters applied.
    pub async fn get_geolocation_with_options(&self, options: &Options) -> Result<GeolocationData> {
        self.fetch(self.url_for(options)?).await
    }

    /// Request URL for the given options, including the API key.
    pub fn url_for(&self, options: &Options) -> Result<Url> {
        self.build_url(&options.query_pairs())
    }

    fn build_url(&self, params: &[(&str, String)]) -> Result<Url> {
        let key = ("apiKey", self.token.as_str());
        let pairs = params.iter().map(|(k, v)| (*k, v.as_str()));
        Ok(Url::parse_with_params(
            &self.base_url,
            std::iter::once(key).chain(pairs),
        )?)
    }

    async fn fetch(&self, url: Url) -> Result<GeolocationData> {
        debug!("GET {}", redact(&url));

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if let Some(err) = GeoError::from_status(status) {
            warn!("Geolocation request failed with status {}", status);
            return Err(err);
        }

        let body = resp.bytes().await?;
        debug!("Received {} byte response", body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Copy of `url` with the API key masked, for logging.
fn redact(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apiKey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
