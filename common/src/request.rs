//! 類似検索リクエストの組み立て
//!
//! 通信前にURL・ヘッダー・フィールドを確定させる。
//! 送信はCLI（reqwest）とブラウザ（fetch）がそれぞれ行う。

use crate::endpoints::ServiceEndpoints;
use crate::query::Query;

/// APIキーのヘッダー名
pub const API_KEY_HEADER: &str = "x-api-key";

pub const IMAGE_ENDPOINT: &str = "similarMarksByImage";
pub const DESCRIPTION_ENDPOINT: &str = "similarMarksByDescription";

pub const IMAGE_FIELD: &str = "image";
pub const IMAGE_FILE_NAME: &str = "cropped_image.png";
pub const IMAGE_MIME: &str = "image/png";
pub const DESCRIPTION_FIELD: &str = "description";
pub const GOODS_SERVICES_FIELD: &str = "gs_desc";

/// マルチパートのファイルパート
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: &'static str,
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// リクエストボディ
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// multipart/form-data（画像検索）
    Multipart {
        file: FilePart,
        fields: Vec<(&'static str, String)>,
    },
    /// application/x-www-form-urlencoded（説明文検索）
    Form(Vec<(&'static str, String)>),
}

/// 1回分の検索リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub url: String,
    /// 未設定ならヘッダー自体を付けない
    pub api_key: Option<String>,
    pub body: RequestBody,
    /// エラー時にレスポンス本文を表示するか
    pub keep_error_body: bool,
}

impl RequestPlan {
    pub fn build(query: &Query, endpoints: &ServiceEndpoints) -> Self {
        let api_key = endpoints.api_key().map(str::to_string);
        let keep_error_body = query.shows_error_body();

        match query {
            Query::Image(q) => {
                let mut fields = Vec::new();
                if let Some(gs) = &q.goods_services {
                    fields.push((GOODS_SERVICES_FIELD, gs.clone()));
                }
                Self {
                    url: endpoints.endpoint(IMAGE_ENDPOINT),
                    api_key,
                    body: RequestBody::Multipart {
                        file: FilePart {
                            field: IMAGE_FIELD,
                            file_name: IMAGE_FILE_NAME,
                            mime: IMAGE_MIME,
                            bytes: q.png.clone(),
                        },
                        fields,
                    },
                    keep_error_body,
                }
            }
            Query::Description(q) => {
                let mut fields = vec![(DESCRIPTION_FIELD, q.description.clone())];
                if let Some(gs) = &q.goods_services {
                    fields.push((GOODS_SERVICES_FIELD, gs.clone()));
                }
                Self {
                    url: endpoints.endpoint(DESCRIPTION_ENDPOINT),
                    api_key,
                    body: RequestBody::Form(fields),
                    keep_error_body,
                }
            }
        }
    }

    /// ヘッダー一覧（APIキー設定時のみ）
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        self.api_key
            .iter()
            .map(|key| (API_KEY_HEADER, key.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{DescriptionQuery, ImageQuery};

    fn endpoints(api_key: Option<&str>) -> ServiceEndpoints {
        ServiceEndpoints::new("https://svc.example.com").with_api_key(api_key.map(String::from))
    }

    #[test]
    fn test_image_plan() {
        let query = Query::Image(ImageQuery {
            png: vec![1, 2, 3],
            goods_services: Some("coffee".into()),
        });
        let plan = RequestPlan::build(&query, &endpoints(Some("k")));

        assert_eq!(plan.url, "https://svc.example.com/similarMarksByImage");
        assert_eq!(plan.headers(), vec![("x-api-key", "k".to_string())]);
        assert!(!plan.keep_error_body);
        match plan.body {
            RequestBody::Multipart { file, fields } => {
                assert_eq!(file.field, "image");
                assert_eq!(file.file_name, "cropped_image.png");
                assert_eq!(file.mime, "image/png");
                assert_eq!(file.bytes, vec![1, 2, 3]);
                assert_eq!(fields, vec![("gs_desc", "coffee".to_string())]);
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_api_key_header_is_not_trimmed() {
        let query = Query::Image(ImageQuery { png: vec![1], goods_services: None });
        let plan = RequestPlan::build(&query, &endpoints(Some("k-123 ")));
        assert_eq!(plan.headers(), vec![("x-api-key", "k-123 ".to_string())]);
    }

    #[test]
    fn test_image_plan_without_goods_services() {
        let query = Query::Image(ImageQuery { png: vec![9], goods_services: None });
        let plan = RequestPlan::build(&query, &endpoints(None));
        assert!(plan.headers().is_empty());
        match plan.body {
            RequestBody::Multipart { fields, .. } => assert!(fields.is_empty()),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_description_plan() {
        let query = Query::Description(DescriptionQuery {
            description: "A chef in an apron".into(),
            goods_services: Some("sandwiches".into()),
        });
        let plan = RequestPlan::build(&query, &endpoints(None));

        assert_eq!(plan.url, "https://svc.example.com/similarMarksByDescription");
        assert!(plan.api_key.is_none());
        assert!(plan.keep_error_body);
        assert_eq!(
            plan.body,
            RequestBody::Form(vec![
                ("description", "A chef in an apron".to_string()),
                ("gs_desc", "sandwiches".to_string()),
            ])
        );
    }
}
