//! オブジェクトストレージからの取得
//!
//! AWS認証情報が環境変数にあれば署名付き（SigV4）、なければ匿名でGETする。
//! 署名は s3:// のときのみ。

mod sigv4;

pub use sigv4::{sign_get, AwsCredentials};

use crate::error::{Result, TrademarkError};
use std::time::Duration;
use trademark_search_common::ObjectLocation;

/// オブジェクトをテキストとして取得
pub struct ObjectStore {
    http: reqwest::Client,
    region: String,
    credentials: Option<AwsCredentials>,
}

impl ObjectStore {
    pub fn new(region: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            region: region.into(),
            credentials: AwsCredentials::from_env(),
        })
    }

    pub fn with_credentials(mut self, credentials: Option<AwsCredentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub async fn fetch_text(&self, location: &ObjectLocation) -> Result<String> {
        let resolved = location.resolve(&self.region);
        let mut request = self.http.get(&resolved.url);

        match (&self.credentials, location.is_s3()) {
            (Some(credentials), true) => {
                let now = chrono::Utc::now();
                for (name, value) in sign_get(credentials, &self.region, &resolved.host, &resolved.path, now)? {
                    request = request.header(name, value);
                }
                log::debug!("signed GET {}", resolved.url);
            }
            _ => log::debug!("anonymous GET {}", resolved.url),
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrademarkError::Storage(format!("{} ({})", status, resolved.url)));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 1回だけ応答するローカルサーバー
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        base
    }

    #[tokio::test]
    async fn test_fetch_text_anonymous() {
        let base = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nA,B,C").await;
        let store = ObjectStore::new("us-east-1", 5).unwrap().with_credentials(None);
        let location = ObjectLocation::parse(&format!("{}/data.csv", base)).unwrap();
        assert_eq!(store.fetch_text(&location).await.unwrap(), "A,B,C");
    }

    #[tokio::test]
    async fn test_fetch_text_not_found() {
        let base = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;
        let store = ObjectStore::new("us-east-1", 5).unwrap().with_credentials(None);
        let location = ObjectLocation::parse(&format!("{}/missing.csv", base)).unwrap();
        let err = store.fetch_text(&location).await.unwrap_err();
        assert!(matches!(err, TrademarkError::Storage(ref m) if m.contains("404")));
    }
}
