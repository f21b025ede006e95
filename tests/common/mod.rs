//! Shared fixtures for the API integration tests.

use kanban_board_ui::config::ApiConfig;
use kanban_board_ui::core::services::TaskApi;
use serde_json::{json, Value};
use std::net::TcpListener;
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server.
pub fn api_for(server: &MockServer) -> TaskApi {
    let config = ApiConfig::new(&server.uri()).expect("mock server uri is a valid base");
    TaskApi::new(config)
}

/// Client pointed at a local port nothing listens on.
#[allow(dead_code)]
pub fn api_for_closed_port() -> TaskApi {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("listener address").port();
    drop(listener);
    let config = ApiConfig::new(&format!("http://127.0.0.1:{}/", port)).expect("closed port is a valid base");
    TaskApi::new(config)
}

pub fn task_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "descricao": format!("Tarefa {}", id),
        "setor": "Financeiro",
        "prioridade": "Alta",
        "status": status,
        "usuario": 1,
        "created_at": "2024-05-02T14:30:00.123456Z",
    })
}
