// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept connections until `state.shutdown` is notified
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
) {
    let shutdown = Arc::clone(&state.shutdown);
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppState, Config};
    use crate::server::create_reusable_listener;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_serves_asset_over_tcp_then_shuts_down() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("public");
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("css/site.css"), b"body{}").unwrap();
        let cfg_path = dir.path().join("gate.toml");
        fs::write(
            &cfg_path,
            format!(
                "[logging]\naccess_log = false\n\n[assets]\nroot = '{}'\nprefix = \"/assets/\"\n",
                root.display()
            ),
        )
        .unwrap();
        let cfg = Config::load_from(cfg_path.to_str().unwrap()).unwrap();
        let state = Arc::new(AppState::new(&cfg).unwrap());

        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(start_server_loop(
            listener,
            Arc::clone(&state),
            Arc::new(AtomicUsize::new(0)),
        ));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /assets/css/site.css HTTP/1.1\r\nHost: test\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        let text = String::from_utf8_lossy(&raw).to_ascii_lowercase();
        assert!(text.starts_with("http/1.1 200 ok"), "got: {text}");
        assert!(text.contains("content-type: text/css"));
        assert!(text.contains("content-length: 6"));
        assert!(text.ends_with("body{}"));

        state.shutdown.notify_one();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
    }
}
