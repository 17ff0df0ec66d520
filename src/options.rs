//! Query options for `Client::get_geolocation_with_options`
//!
//! Every setter validates its input and leaves the options untouched when
//! validation fails.

use std::net::IpAddr;

use crate::error::{GeoError, Result};
use crate::model::is_data_field;

/// Response languages supported by the service
pub const LANGUAGES: [&str; 9] = ["en", "de", "ru", "ja", "fr", "cn", "es", "cs", "it"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    ip: String,
    language: String,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IP to look up. Leave unset to look up the caller's own address.
    pub fn set_ip(&mut self, ip: &str) -> Result<()> {
        ip.parse::<IpAddr>()
            .map_err(|_| GeoError::InvalidIp(ip.to_string()))?;
        self.ip = ip.to_string();
        Ok(())
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        if !LANGUAGES.contains(&language) {
            return Err(GeoError::InvalidLanguage(language.to_string()));
        }
        self.language = language.to_string();
        Ok(())
    }

    /// Only return the given top-level field.
    pub fn set_include(&mut self, field: &str) -> Result<()> {
        check_field(field)?;
        self.include.push(field.to_string());
        Ok(())
    }

    /// Validates every field first, so a bad entry appends nothing.
    pub fn set_includes<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        for field in fields {
            check_field(field.as_ref())?;
        }
        self.include
            .extend(fields.iter().map(|f| f.as_ref().to_string()));
        Ok(())
    }

    /// Leave the given top-level field out of the response.
    pub fn set_exclude(&mut self, field: &str) -> Result<()> {
        check_field(field)?;
        self.exclude.push(field.to_string());
        Ok(())
    }

    pub fn set_excludes<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        for field in fields {
            check_field(field.as_ref())?;
        }
        self.exclude
            .extend(fields.iter().map(|f| f.as_ref().to_string()));
        Ok(())
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn includes(&self) -> &[String] {
        &self.include
    }

    pub fn excludes(&self) -> &[String] {
        &self.exclude
    }

    /// Query parameters for these options, in request order. Empty values are skipped.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if !self.ip.is_empty() {
            pairs.push(("ip", self.ip.clone()));
        }
        if !self.include.is_empty() {
            pairs.push(("fields", self.include.join(",")));
        }
        if !self.exclude.is_empty() {
            pairs.push(("excludes", self.exclude.join(",")));
        }
        if !self.language.is_empty() {
            pairs.push(("lang", self.language.clone()));
        }
        pairs
    }
}

fn check_field(field: &str) -> Result<()> {
    if is_data_field(field) {
        Ok(())
    } else {
        Err(GeoError::InvalidField(field.to_string()))
    }
}
