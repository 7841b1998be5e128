//! エラー型定義

use thiserror::Error;

/// 入力検証エラー（送信時の必須入力チェック）
///
/// 表示文言はそのまま警告として画面に出す
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload an image file and crop it first.")]
    MissingImage,

    #[error("Please enter a description of the trademark image.")]
    MissingDescription,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid probability at line {line}: {value}")]
    InvalidProbability { line: u64, value: String },

    #[error("Threshold must be between 0 and 100: {0}")]
    InvalidThreshold(f64),

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Invalid data location: {0}")]
    Location(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingImage.to_string(),
            "Please upload an image file and crop it first."
        );
        assert_eq!(
            ValidationError::MissingDescription.to_string(),
            "Please enter a description of the trademark image."
        );
    }

    #[test]
    fn test_error_display_validation_passthrough() {
        let error: Error = ValidationError::MissingDescription.into();
        assert_eq!(error.to_string(), "Please enter a description of the trademark image.");
    }

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_display_threshold() {
        let error = Error::InvalidThreshold(120.0);
        assert_eq!(error.to_string(), "Threshold must be between 0 and 100: 120");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("テスト"));
    }
}
