use serde::{Deserialize, Serialize};

/// Top-level field names of [`GeolocationData`] as they appear on the wire.
///
/// These are the only values accepted by the `fields` and `excludes` filters.
pub const FIELD_NAMES: [&str; 24] = [
    "ip",
    "continent_code",
    "continent_name",
    "country_code2",
    "country_code3",
    "country_name",
    "country_capital",
    "state_prov",
    "district",
    "city",
    "zipcode",
    "latitude",
    "longitude",
    "is_eu",
    "calling_code",
    "country_tld",
    "languages",
    "country_flag",
    "geoname_id",
    "isp",
    "connection_type",
    "organization",
    "currency",
    "time_zone",
];

pub fn is_data_field(field: &str) -> bool {
    FIELD_NAMES.contains(&field)
}

/// Full response of the `/ipgeo` endpoint.
///
/// Fields the server leaves out (because of `fields`/`excludes`) decode to
/// their defaults.
/// Documentation: https://ipgeolocation.io/documentation/ip-geolocation-api.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationData {
    pub ip: String,
    pub continent_code: String,
    pub continent_name: String,
    pub country_code2: String,
    pub country_code3: String,
    pub country_name: String,
    pub country_capital: String,
    pub state_prov: String,
    pub district: String,
    pub city: String,
    pub zipcode: String,
    pub latitude: String,
    pub longitude: String,
    pub is_eu: bool,
    pub calling_code: String,
    pub country_tld: String,
    pub languages: String,
    pub country_flag: String,
    pub geoname_id: String,
    pub isp: String,
    pub connection_type: String,
    pub organization: String,
    pub currency: Currency,
    #[serde(rename = "time_zone")]
    pub timezone: Timezone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezone {
    pub name: String,
    /// Hours from UTC; fractional for zones like Asia/Kolkata (5.5)
    pub offset: f64,
    pub current_time: String,
    pub current_time_unix: f64,
    pub is_dst: bool,
    pub dst_savings: i32,
}
