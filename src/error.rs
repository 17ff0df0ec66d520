use reqwest::StatusCode;
use thiserror::Error;

/// Error type for geolocation lookups
#[derive(Debug, Error)]
pub enum GeoError {
    /// IP address failed to parse
    #[error("ip got invalid format: {0}")]
    InvalidIp(String),
    /// Language is not one of the supported codes
    #[error("language is not valid: {0}")]
    InvalidLanguage(String),
    /// Field is not a top-level field of the response
    #[error("field is invalid: {0}")]
    InvalidField(String),
    /// Base URL could not be parsed
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// 400
    #[error("your subscription is paused from use")]
    SubscriptionPaused,
    /// 401
    #[error("401 error code, permission denied")]
    PermissionDenied,
    /// 403
    #[error("ip address or domain is not valid")]
    InvalidAddress,
    /// 404
    #[error("ip not found in database")]
    NotFound,
    /// 423
    #[error("private ip address")]
    PrivateAddress,
    /// Any other non-2xx status
    #[error("got non 200 status code: {0}")]
    Status(u16),
    /// Transport error from the HTTP client
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Response body was not a valid geolocation record
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl GeoError {
    /// Classify a response status. Returns `None` for 2xx.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }
        Some(match status.as_u16() {
            400 => GeoError::SubscriptionPaused,
            401 => GeoError::PermissionDenied,
            403 => GeoError::InvalidAddress,
            404 => GeoError::NotFound,
            423 => GeoError::PrivateAddress,
            code => GeoError::Status(code),
        })
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
