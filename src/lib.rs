//! Unofficial client for the ipgeolocation.io IP geolocation API
//!
//! ```no_run
//! use ipgeolocation::{Client, Options};
//!
//! # async fn run() -> ipgeolocation::Result<()> {
//! let client = Client::new("your-api-key");
//!
//! let mut options = Options::new();
//! options.set_ip("8.8.8.8")?;
//! options.set_language("de")?;
//! options.set_includes(&["city", "country_name", "time_zone"])?;
//!
//! let data = client.get_geolocation_with_options(&options).await?;
//! println!("{} ({})", data.city, data.timezone.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod options;

pub use client::{Client, BASE_URL};
pub use error::{GeoError, Result};
pub use model::{Currency, GeolocationData, Timezone, FIELD_NAMES};
pub use options::{Options, LANGUAGES};
