//! Shared utilities for integration tests.

use std::net::SocketAddr;

use repository_api::config::ApiConfig;
use repository_api::http::HttpServer;
use tokio::net::TcpListener;

/// Start the service on an ephemeral local port and return its address.
pub async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ApiConfig::default();
    config.listener.bind_host = "127.0.0.1".into();
    config.listener.port = addr.port();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Client that bypasses any system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
