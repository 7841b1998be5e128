use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrademarkError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("類似検索サービスのURLが設定されていません。`tm-search config --set-service-url URL` または環境変数 SIMILARITY_SEARCH_SVC で設定してください")]
    MissingServiceUrl,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}")]
    UnsupportedImage(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ストレージ取得エラー: {0}")]
    Storage(String),

    #[error("{0}")]
    Common(#[from] trademark_search_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, TrademarkError>;
