//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use mock_service::config::MockServerConfig;
use mock_service::lifecycle::Shutdown;
use mock_service::store::RuleStore;
use mock_service::HttpServer;

/// A mock service instance running on an ephemeral port over a caller-owned
/// rules file.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop this instance and start a fresh one over the same rules file.
    ///
    /// Stands in for the real restart cycle (process exit + supervisor
    /// relaunch): the new instance re-reads the store and re-binds routes.
    pub async fn restart(self, data_file: PathBuf) -> TestServer {
        self.shutdown.trigger();
        start_server(data_file).await
    }
}

/// Spawn a server bound to an ephemeral port, rules loaded from `data_file`.
pub async fn start_server(data_file: PathBuf) -> TestServer {
    let config = MockServerConfig::default();
    let store = Arc::new(RuleStore::open(data_file).unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config, store);
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    wait_until_ready(addr).await;

    TestServer { addr, shutdown }
}

/// Poll the health endpoint until the acceptor answers. Fixed sleeps race
/// the acceptor on loaded machines.
async fn wait_until_ready(addr: SocketAddr) {
    let client = client();
    let url = format!("http://{}/health", addr);
    for _ in 0..100 {
        if let Ok(res) = client.get(&url).send().await {
            if res.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {} did not become ready", addr);
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
