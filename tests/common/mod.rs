use picarones::{ClientConfig, SearchClient, SearchSession};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SearchClient {
    SearchClient::new(&config_for(server))
}

#[allow(dead_code)]
pub fn session_for(server: &MockServer) -> SearchSession {
    SearchSession::new(SearchClient::new(&config_for(server)))
}

/// Answer every `/api/search` POST with the given JSON body.
#[allow(dead_code)]
pub async fn mount_search_response(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
