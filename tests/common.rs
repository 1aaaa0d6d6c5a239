#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use hotlist::HotClient;
use std::{fs, path::Path};
use url::Url;

pub const API_PATH: &str = "/api/v3/feed/topstory/hot-lists/total";
pub const HOT_PATH: &str = "/hot";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose three endpoints all point at `server`.
pub fn client_for(server: &MockServer) -> HotClient {
    client_builder_for(server).build().unwrap()
}

pub fn client_builder_for(server: &MockServer) -> hotlist::HotClientBuilder {
    HotClient::builder()
        .home_url(Url::parse(&server.url("/")).unwrap())
        .hot_url(Url::parse(&server.url(HOT_PATH)).unwrap())
        .api_url(Url::parse(&format!("{}?limit=50", server.url(API_PATH))).unwrap())
}

pub fn mock_hot_api(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(API_PATH).query_param("limit", "50");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("hot_api.json"));
    })
}

pub fn mock_hot_api_status(server: &MockServer, status: u16) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(API_PATH);
        then.status(status).body("upstream says no");
    })
}

pub fn mock_hot_page(server: &MockServer) -> Mock<'_> {
    mock_hot_page_body(server, fixture("hot_page.html"))
}

pub fn mock_hot_page_body(server: &MockServer, body: impl Into<String>) -> Mock<'_> {
    let body = body.into();
    server.mock(|when, then| {
        when.method(GET).path(HOT_PATH);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}
