//! Lookups against a local server serving canned ipgeolocation responses

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use ipgeolocation::{Client, GeoError, Options};

const FIXTURE: &str = include_str!("fixtures/geolocation.json");

/// Replies with the status encoded in the API key (`status-423`), garbage for
/// `garbage`, and the fixture otherwise.
async fn ipgeo(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let key = query.get("apiKey").map(String::as_str).unwrap_or("");
    if let Some(code) = key.strip_prefix("status-").and_then(|c| c.parse::<u16>().ok()) {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return HttpResponse::build(status)
            .content_type("application/json")
            .body(r#"{"message": "error"}"#);
    }
    if key == "garbage" {
        return HttpResponse::Ok().content_type("application/json").body("not json");
    }
    HttpResponse::Ok().content_type("application/json").body(FIXTURE)
}

/// Mirrors the received query parameters into string fields of the record.
async fn echo(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let get = |k: &str| query.get(k).cloned().unwrap_or_default();
    HttpResponse::Ok().json(serde_json::json!({
        "ip": get("ip"),
        "organization": get("apiKey"),
        "city": get("fields"),
        "district": get("excludes"),
        "languages": get("lang"),
        "is_eu": query.len() == 5,
    }))
}

async fn spawn_server() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/ipgeo", web::get().to(ipgeo))
            .route("/echo", web::get().to(echo))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn client(base: &str, path: &str, key: &str) -> Client {
    Client::new(key)
        .with_base_url(&format!("{}{}", base, path))
        .unwrap()
}

#[actix_web::test]
async fn test_lookup_decodes_full_record() {
    let base = spawn_server().await;
    let data = client(&base, "/ipgeo", "valid")
        .get_geolocation("8.8.8.8")
        .await
        .unwrap();

    assert_eq!(data.ip, "8.8.8.8");
    assert_eq!(data.continent_name, "North America");
    assert_eq!(data.country_code3, "USA");
    assert_eq!(data.state_prov, "California");
    assert_eq!(data.zipcode, "94043-1351");
    assert_eq!(data.latitude, "37.42240");
    assert_eq!(data.calling_code, "+1");
    assert_eq!(data.geoname_id, "6301403");
    assert_eq!(data.isp, "Google LLC");
    assert_eq!(data.currency.symbol, "$");
    assert_eq!(data.timezone.current_time_unix, 1608220185.872);
    assert!(!data.timezone.is_dst);
}

#[actix_web::test]
async fn test_status_codes_map_to_errors() {
    let base = spawn_server().await;
    let cases = [
        (400, "your subscription is paused from use"),
        (401, "401 error code, permission denied"),
        (403, "ip address or domain is not valid"),
        (404, "ip not found in database"),
        (423, "private ip address"),
        (429, "got non 200 status code: 429"),
        (500, "got non 200 status code: 500"),
    ];

    for (code, message) in cases {
        let client = client(&base, "/ipgeo", &format!("status-{}", code));

        let err = client.get_geolocation("8.8.8.8").await.unwrap_err();
        assert_eq!(err.to_string(), message);

        let err = client
            .get_geolocation_with_options(&Options::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}

#[actix_web::test]
async fn test_invalid_body_is_decode_error() {
    let base = spawn_server().await;
    let err = client(&base, "/ipgeo", "garbage")
        .get_geolocation("")
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::Decode(_)));
}

#[actix_web::test]
async fn test_options_reach_the_server() {
    let base = spawn_server().await;
    let mut options = Options::new();
    options.set_ip("1.0.0.1").unwrap();
    options.set_language("cs").unwrap();
    options.set_includes(&["city", "district"]).unwrap();
    options.set_exclude("isp").unwrap();

    let data = client(&base, "/echo", "echo-key")
        .get_geolocation_with_options(&options)
        .await
        .unwrap();

    assert_eq!(data.ip, "1.0.0.1");
    assert_eq!(data.organization, "echo-key");
    assert_eq!(data.city, "city,district");
    assert_eq!(data.district, "isp");
    assert_eq!(data.languages, "cs");
    assert!(data.is_eu);
}

#[actix_web::test]
async fn test_empty_ip_is_not_sent() {
    let base = spawn_server().await;
    let data = client(&base, "/echo", "k").get_geolocation("").await.unwrap();
    assert_eq!(data.ip, "");
    assert_eq!(data.organization, "k");
    assert!(!data.is_eu);
}

#[actix_web::test]
async fn test_transport_error_passes_through() {
    let client = Client::new("k").with_base_url("http://127.0.0.1:1/ipgeo").unwrap();
    let err = client.get_geolocation("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, GeoError::Http(_)));
}
