//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use traced_crud::config::{ResourceKind, ServiceConfig};
use traced_crud::http::HttpServer;
use traced_crud::lifecycle::Shutdown;

/// A running service bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a service instance serving `resource`.
pub async fn start_service(resource: ResourceKind) -> TestService {
    let mut config = ServiceConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.service.resource = resource;
    start_with_config(config).await
}

/// Start a service instance with a custom configuration.
#[allow(dead_code)]
pub async fn start_with_config(config: ServiceConfig) -> TestService {
    let listener = TcpListener::bind(config.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestService {
        addr,
        client,
        shutdown,
    }
}
