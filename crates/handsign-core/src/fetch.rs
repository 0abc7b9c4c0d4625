//! Model artifact resolution
//!
//! Ensures the model artifact exists locally before the loader runs,
//! streaming it from the remote source when absent. The download lands in a
//! sibling `.part` file and is renamed into place only on success, so a
//! failed fetch never leaves a partial artifact at the final path.

use crate::error::FetchError;
use futures_util::StreamExt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Make sure a model artifact exists at `path`, fetching it from
/// `remote_url` if absent.
///
/// Idempotent: once the file is present, later calls return immediately
/// without touching the network.
pub async fn ensure_artifact_present(
    path: impl AsRef<Path>,
    remote_url: &str,
) -> Result<(), FetchError> {
    let path = path.as_ref();

    if path.exists() {
        debug!(path = %path.display(), "model artifact already present");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    info!(url = remote_url, path = %path.display(), "fetching model artifact");

    let response = reqwest::get(remote_url).await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let tmp = part_path(path);
    match stream_to_file(response, &tmp).await {
        Ok(()) => {
            fs::rename(&tmp, path).await?;
            info!(path = %path.display(), "model artifact fetched");
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp).await;
            Err(e)
        }
    }
}

/// Sibling temp path: `gesture_model.json` -> `gesture_model.json.part`
fn part_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

async fn stream_to_file(response: reqwest::Response, tmp: &Path) -> Result<(), FetchError> {
    let mut file = fs::File::create(tmp).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }

    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    /// One-shot HTTP server answering every connection with `status`.
    async fn serve_status(status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response =
                    format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        format!("http://{addr}/gesture_model.json")
    }

    #[tokio::test]
    async fn existing_file_short_circuits_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gesture_model.json");
        std::fs::write(&path, b"{\"existing\": true}").unwrap();

        // Unroutable URL: any network attempt would fail the test.
        let url = "http://127.0.0.1:1/gesture_model.json";
        ensure_artifact_present(&path, url).await.unwrap();
        ensure_artifact_present(&path, url).await.unwrap();

        let contents = std::fs::read(&path).unwrap();
        assert_eq!(contents, b"{\"existing\": true}");
    }

    #[tokio::test]
    async fn non_success_status_fails_and_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gesture_model.json");

        let url = serve_status("404 Not Found").await;
        let err = ensure_artifact_present(&path, &url).await.unwrap_err();

        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 404));
        assert!(!path.exists());
        assert!(!part_path(&path).exists());
    }

    #[tokio::test]
    async fn connection_failure_fails_and_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gesture_model.json");

        let err = ensure_artifact_present(&path, "http://127.0.0.1:1/model.json")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Request(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn successful_fetch_writes_artifact_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gesture_model.json");

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = b"{\"labels\":[]}";

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.write_all(body).await;
            }
        });

        let url = format!("http://{addr}/gesture_model.json");
        ensure_artifact_present(&path, &url).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), body);
        assert!(!part_path(&path).exists());
    }
}
