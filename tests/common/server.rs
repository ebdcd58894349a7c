//! Mock API helpers

use super::fixtures::generated_payload;
use pokedex_loader::{ApiConfig, Config, PaginationConfig};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path records are served under
pub const RECORD_PATH: &str = "/api/v2/pokemon";

/// Serve a raw JSON body for one ID
pub async fn mount_body(server: &MockServer, id: u32, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{RECORD_PATH}/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"))
        .mount(server)
        .await;
}

/// Serve generated payloads for every ID in `ids`, each after `delay`
pub async fn mount_generated(
    server: &MockServer,
    ids: impl IntoIterator<Item = u32>,
    delay: Duration,
) {
    for id in ids {
        Mock::given(method("GET"))
            .and(path(format!("{RECORD_PATH}/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(generated_payload(id))
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }
}

/// Answer one ID with a bare status code
pub async fn mount_status(server: &MockServer, id: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("{RECORD_PATH}/{id}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Loader configuration pointing at the mock server
pub fn config_for(server: &MockServer, start_offset: u32, page_size: usize) -> Config {
    Config {
        api: ApiConfig {
            base_url: format!("{}{RECORD_PATH}/", server.uri()),
            ..Default::default()
        },
        pagination: PaginationConfig {
            start_offset,
            page_size,
            ..Default::default()
        },
    }
}
