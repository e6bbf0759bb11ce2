//! Throwaway HTTP server for exercising the sheets repository end to end.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sheet_catalog::infrastructure::config::{CatalogConfig, SheetsConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    /// Accept the connection and never answer
    Stall,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Self::Status(200, body.to_string())
    }
}

pub struct SheetServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl SheetServer {
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let reply = reply.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let mut read = 0;
                    while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf[read..]).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => read += n,
                        }
                    }
                    let head = String::from_utf8_lossy(&buf[..read]);
                    let request_line = head.lines().next().unwrap_or_default().to_string();
                    seen.lock().unwrap().push(request_line);

                    match reply {
                        Reply::Stall => {
                            tokio::time::sleep(Duration::from_secs(30)).await;
                        }
                        Reply::Status(status, body) => {
                            let response = format!(
                                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                                body.len()
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                    }
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/v4/spreadsheets", self.addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Config pointing at this server with a usable API key.
    pub fn config(&self, use_fallback_on_error: bool, timeout_ms: u64) -> CatalogConfig {
        let mut config = CatalogConfig::default();
        config.sheets = SheetsConfig {
            api_url: self.api_url(),
            sheet_id: "sheet-123".to_string(),
            api_key: "test-key".to_string(),
            request_timeout_ms: timeout_ms,
            use_fallback_on_error,
            ..Default::default()
        };
        config
    }
}

impl Drop for SheetServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A local address with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v4/spreadsheets")
}
