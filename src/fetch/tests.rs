// Fetch module tests: each stage against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{Endpoints, SpotterClient};
use crate::config::Config;
use crate::error_handling::{ErrorKind, Stage};
use crate::models::{Coordinates, PassWindow};

fn client_for(server: &MockServer) -> SpotterClient {
    let config = Config {
        timeout_seconds: 5,
        ip_lookup_url: format!("{}/ip", server.uri()),
        geolocation_url: format!("{}/geo", server.uri()),
        pass_times_url: format!("{}/json/", server.uri()),
        ..Default::default()
    };
    SpotterClient::from_config(&config).expect("Failed to build client")
}

fn toronto() -> Coordinates {
    Coordinates {
        latitude: 43.6532,
        longitude: -79.3832,
    }
}

#[test]
fn test_endpoints_from_default_config() {
    assert_eq!(Endpoints::from(&Config::default()), Endpoints::default());
}

#[test]
fn test_geolocation_url_appends_ip_segment() {
    let endpoints = Endpoints {
        geolocation_url: "https://ipwho.is/".to_string(),
        ..Default::default()
    };
    assert_eq!(
        endpoints.geolocation_for("99.246.181.44"),
        "https://ipwho.is/99.246.181.44"
    );
}

#[tokio::test]
async fn test_fetch_my_ip_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "99.246.181.44"})))
        .expect(1)
        .mount(&server)
        .await;

    let ip = client_for(&server).fetch_my_ip().await.unwrap();
    assert_eq!(ip, "99.246.181.44");
}

#[tokio::test]
async fn test_fetch_my_ip_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_my_ip().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteError);
    assert_eq!(err.stage(), Stage::IpLookup);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_fetch_my_ip_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("99.246.181.44"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_my_ip().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert_eq!(err.stage(), Stage::IpLookup);
}

#[tokio::test]
async fn test_fetch_coords_by_ip_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/99.246.181.44"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "ip": "99.246.181.44",
            "city": "Toronto",
            "latitude": 43.6532,
            "longitude": -79.3832
        })))
        .expect(1)
        .mount(&server)
        .await;

    let coords = client_for(&server)
        .fetch_coords_by_ip("99.246.181.44")
        .await
        .unwrap();
    assert_eq!(coords, toronto());
}

#[tokio::test]
async fn test_fetch_coords_by_ip_success_flag_false() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/0.0.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "invalid query",
            "ip": "0.0.0.0"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_coords_by_ip("0.0.0.0")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteError);
    assert_eq!(err.stage(), Stage::Geolocation);
    assert_eq!(err.status(), None);
    let message = err.to_string();
    assert!(message.contains("invalid query"));
    assert!(message.contains("0.0.0.0"));
}

#[tokio::test]
async fn test_fetch_coords_by_ip_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_coords_by_ip("1.2.3.4")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert_eq!(err.stage(), Stage::Geolocation);
}

#[tokio::test]
async fn test_fetch_coords_by_ip_error_status_without_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.2.3.4"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_coords_by_ip("1.2.3.4")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteError);
    assert_eq!(err.status(), Some(429));
    assert!(err.to_string().contains("slow down"));
}

#[tokio::test]
async fn test_fetch_coords_by_ip_success_without_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "ip": "1.2.3.4"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_coords_by_ip("1.2.3.4")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert!(err.to_string().contains("latitude or longitude"));
}

#[tokio::test]
async fn test_fetch_pass_times_success_preserves_order() {
    let server = MockServer::start().await;
    // Deliberately out of chronological order: the list must come back untouched
    Mock::given(method("GET"))
        .and(path("/json/"))
        .and(query_param("lat", "43.6532"))
        .and(query_param("lon", "-79.3832"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "success",
            "response": [
                {"risetime": 1579940740, "duration": 480},
                {"risetime": 1579934950, "duration": 600}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let passes = client_for(&server)
        .fetch_pass_times(&toronto())
        .await
        .unwrap();
    assert_eq!(
        passes,
        vec![
            PassWindow {
                risetime: 1579940740,
                duration: 480
            },
            PassWindow {
                risetime: 1579934950,
                duration: 600
            },
        ]
    );
}

#[tokio::test]
async fn test_fetch_pass_times_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
        .mount(&server)
        .await;

    let passes = client_for(&server)
        .fetch_pass_times(&toronto())
        .await
        .unwrap();
    assert!(passes.is_empty());
}

#[tokio::test]
async fn test_fetch_pass_times_non_200_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Application Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pass_times(&toronto())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteError);
    assert_eq!(err.stage(), Stage::PassTimes);
    assert_eq!(err.status(), Some(503));
    let message = err.to_string();
    assert!(message.contains("503"));
    assert!(message.contains("Application Error"));
}

#[tokio::test]
async fn test_fetch_pass_times_other_2xx_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pass_times(&toronto())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteError);
    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_fetch_pass_times_missing_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "success"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pass_times(&toronto())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert!(err.to_string().contains("response"));
}

#[tokio::test]
async fn test_fetch_pass_times_malformed_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{"risetime": "soon", "duration": 600}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pass_times(&toronto())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert_eq!(err.stage(), Stage::PassTimes);
}

#[tokio::test]
async fn test_fetch_pass_times_failure_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "failure",
            "reason": "Latitude must be number between -80.0 and 80.0"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pass_times(&Coordinates {
            latitude: 89.0,
            longitude: 0.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteError);
    assert!(err.to_string().contains("Latitude must be number"));
}
