//! 類似検索サービスのクライアント
//!
//! 通信・パースの失敗は SearchOutcome::TransportError に畳み込み、
//! 呼び出し側にはエラーを返さない。

use crate::error::Result;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use trademark_search_common::{
    Query, RequestBody, RequestPlan, SearchOutcome, ServiceEndpoints,
};

pub struct SimilarityClient {
    http: reqwest::Client,
    endpoints: ServiceEndpoints,
}

impl SimilarityClient {
    pub fn new(endpoints: ServiceEndpoints, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    /// 検索を実行
    pub async fn search(&self, query: &Query) -> SearchOutcome {
        let plan = RequestPlan::build(query, &self.endpoints);
        log::info!("POST {} ({:?})", plan.url, query.mode());

        match self.send(&plan).await {
            Ok((status, body)) => {
                log::debug!("status {} / {} bytes", status, body.len());
                SearchOutcome::from_response(status, &body, plan.keep_error_body)
            }
            Err(e) => {
                log::warn!("search request failed: {}", e);
                SearchOutcome::transport(e)
            }
        }
    }

    async fn send(&self, plan: &RequestPlan) -> std::result::Result<(u16, String), reqwest::Error> {
        let mut request = self.http.post(&plan.url);

        for (name, value) in plan.headers() {
            request = request.header(name, value);
        }

        request = match &plan.body {
            RequestBody::Multipart { file, fields } => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name)
                    .mime_str(file.mime)?;
                let mut form = Form::new().part(file.field, part);
                for (name, value) in fields {
                    form = form.text(*name, value.clone());
                }
                request.multipart(form)
            }
            RequestBody::Form(fields) => request.form(fields),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}
