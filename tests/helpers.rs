// Shared test helpers: a mock server standing in for all three lookup services.
//
// The IP lookup lives at /ip, geolocation at /geo/<ip>, and pass times at /json/.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iss_spotter::{Config, PassWindow, SpotterClient};

pub const TORONTO_IP: &str = "99.246.181.44";
pub const TORONTO_LAT: &str = "43.6532";
pub const TORONTO_LON: &str = "-79.3832";

/// Config pointing every stage at `server`.
#[allow(dead_code)] // Not every test file uses every helper
pub fn config_for(server: &MockServer) -> Config {
    Config {
        timeout_seconds: 5,
        ip_lookup_url: format!("{}/ip", server.uri()),
        geolocation_url: format!("{}/geo", server.uri()),
        pass_times_url: format!("{}/json/", server.uri()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SpotterClient {
    SpotterClient::from_config(&config_for(server)).expect("Failed to build client")
}

#[allow(dead_code)]
pub fn expected_passes() -> Vec<PassWindow> {
    vec![
        PassWindow {
            risetime: 1579934950,
            duration: 600,
        },
        PassWindow {
            risetime: 1579940740,
            duration: 480,
        },
    ]
}

#[allow(dead_code)]
pub fn passes_body() -> Value {
    json!({
        "message": "success",
        "request": {"latitude": 43.6532, "longitude": -79.3832, "passes": 2},
        "response": [
            {"risetime": 1579934950, "duration": 600},
            {"risetime": 1579940740, "duration": 480}
        ]
    })
}

#[allow(dead_code)]
pub fn toronto_body() -> Value {
    json!({
        "success": true,
        "ip": TORONTO_IP,
        "type": "IPv4",
        "city": "Toronto",
        "latitude": 43.6532,
        "longitude": -79.3832
    })
}

/// Mounts the IP lookup, expecting `times` calls.
#[allow(dead_code)]
pub async fn mount_ip(server: &MockServer, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts the geolocation lookup for `ip`, expecting `times` calls.
#[allow(dead_code)]
pub async fn mount_geolocation(
    server: &MockServer,
    ip: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/geo/{}", ip)))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts the pass-time lookup for the Toronto coordinates, expecting `times` calls.
#[allow(dead_code)]
pub async fn mount_pass_times(server: &MockServer, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/json/"))
        .and(query_param("lat", TORONTO_LAT))
        .and(query_param("lon", TORONTO_LON))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts all three stages answering the Toronto example successfully.
#[allow(dead_code)]
pub async fn mount_happy_path(server: &MockServer, times: u64) {
    mount_ip(
        server,
        ResponseTemplate::new(200).set_body_json(json!({"ip": TORONTO_IP})),
        times,
    )
    .await;
    mount_geolocation(
        server,
        TORONTO_IP,
        ResponseTemplate::new(200).set_body_json(toronto_body()),
        times,
    )
    .await;
    mount_pass_times(
        server,
        ResponseTemplate::new(200).set_body_json(passes_body()),
        times,
    )
    .await;
}

/// Paths requested so far, in arrival order.
#[allow(dead_code)]
pub async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled by default")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
