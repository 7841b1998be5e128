//! 共起確率データの置き場所
//!
//! - s3://bucket/key: 仮想ホスト形式のHTTPS URLに変換
//! - http(s)://...: そのまま

use crate::error::{Error, Result};

/// 取得対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectLocation {
    S3 { bucket: String, key: String },
    Url(String),
}

/// 解決済みの取得先（署名にはホストとパスが要る）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub host: String,
    /// エンコード済みの絶対パス
    pub path: String,
    pub url: String,
}

impl ObjectLocation {
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();

        if let Some(rest) = location.strip_prefix("s3://") {
            let (bucket, key) = rest
                .split_once('/')
                .filter(|(b, k)| !b.is_empty() && !k.is_empty())
                .ok_or_else(|| Error::Location(format!("invalid S3 path: {}", location)))?;
            return Ok(ObjectLocation::S3 {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(ObjectLocation::Url(location.to_string()));
        }

        Err(Error::Location(format!(
            "expected s3:// or https:// location: {}",
            location
        )))
    }

    pub fn is_s3(&self) -> bool {
        matches!(self, ObjectLocation::S3 { .. })
    }

    pub fn resolve(&self, region: &str) -> ResolvedLocation {
        match self {
            ObjectLocation::S3 { bucket, key } => {
                let host = format!("{}.s3.{}.amazonaws.com", bucket, region);
                let path = format!("/{}", uri_encode_path(key));
                let url = format!("https://{}{}", host, path);
                ResolvedLocation { host, path, url }
            }
            ObjectLocation::Url(url) => {
                let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
                let (host, path) = match without_scheme.split_once('/') {
                    Some((host, path)) => (host.to_string(), format!("/{}", path)),
                    None => (without_scheme.to_string(), "/".to_string()),
                };
                ResolvedLocation { host, path, url: url.clone() }
            }
        }
    }
}

/// パスをURIエンコード（"/" は残す）
pub fn uri_encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_s3() {
        let location = ObjectLocation::parse("s3://my-bucket/data/co occurrence.csv").unwrap();
        assert_eq!(
            location,
            ObjectLocation::S3 {
                bucket: "my-bucket".into(),
                key: "data/co occurrence.csv".into()
            }
        );
        let resolved = location.resolve("us-west-2");
        assert_eq!(resolved.host, "my-bucket.s3.us-west-2.amazonaws.com");
        assert_eq!(resolved.path, "/data/co%20occurrence.csv");
        assert_eq!(
            resolved.url,
            "https://my-bucket.s3.us-west-2.amazonaws.com/data/co%20occurrence.csv"
        );
    }

    #[test]
    fn test_parse_url() {
        let location = ObjectLocation::parse(" https://example.com/a/b.csv ").unwrap();
        assert!(!location.is_s3());
        let resolved = location.resolve("us-east-1");
        assert_eq!(resolved.host, "example.com");
        assert_eq!(resolved.path, "/a/b.csv");
        assert_eq!(resolved.url, "https://example.com/a/b.csv");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ObjectLocation::parse("s3://bucket-only").is_err());
        assert!(ObjectLocation::parse("s3:///key").is_err());
        assert!(matches!(
            ObjectLocation::parse("/local/file.csv"),
            Err(Error::Location(_))
        ));
    }

    #[test]
    fn test_uri_encode_path() {
        assert_eq!(uri_encode_path("data/a b+c.csv"), "data/a%20b%2Bc.csv");
        assert_eq!(uri_encode_path("~x_y-z.1"), "~x_y-z.1");
    }
}
