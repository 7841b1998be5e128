//! 類似検索サービス連携
//!
//! リクエスト内容は共通ライブラリの RequestPlan で決め、ここでは fetch に載せるだけ。
//! 例外はすべて SearchOutcome::TransportError に畳み込む。

use super::{js_error, window};
use leptos::logging;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response, UrlSearchParams};
use trademark_search_common::{Query, RequestBody, RequestPlan, SearchOutcome, ServiceEndpoints};

/// 検索を実行
pub async fn search(query: &Query, endpoints: &ServiceEndpoints) -> SearchOutcome {
    let plan = RequestPlan::build(query, endpoints);
    logging::log!("POST {}", plan.url);

    match send(&plan).await {
        Ok((status, body)) => SearchOutcome::from_response(status, &body, plan.keep_error_body),
        Err(e) => {
            let message = js_error(&e);
            logging::warn!("search request failed: {}", message);
            SearchOutcome::transport(message)
        }
    }
}

/// バイト列からBlobを作る
fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<Blob, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

fn request_body(body: &RequestBody) -> Result<JsValue, JsValue> {
    match body {
        RequestBody::Multipart { file, fields } => {
            let form = FormData::new()?;
            let blob = bytes_to_blob(&file.bytes, file.mime)?;
            form.append_with_blob_and_filename(file.field, &blob, file.file_name)?;
            for (name, value) in fields {
                form.append_with_str(name, value)?;
            }
            Ok(form.into())
        }
        RequestBody::Form(fields) => {
            // Content-Type はブラウザが x-www-form-urlencoded を付ける
            let params = UrlSearchParams::new()?;
            for (name, value) in fields {
                params.append(name, value);
            }
            Ok(params.into())
        }
    }
}

async fn send(plan: &RequestPlan) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&request_body(&plan.body)?);

    let request = Request::new_with_str_and_init(&plan.url, &opts)?;
    for (name, value) in plan.headers() {
        request.headers().set(name, &value)?;
    }

    let resp_value = JsFuture::from(window()?.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let text = JsFuture::from(resp.text()?).await?;
    Ok((status, text.as_string().unwrap_or_default()))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use trademark_search_common::{DescriptionQuery, ImageQuery, Query};
    use wasm_bindgen_test::*;
    use web_sys::File;

    wasm_bindgen_test_configure!(run_in_browser);

    fn endpoints() -> ServiceEndpoints {
        ServiceEndpoints::new("https://svc.example.com")
    }

    #[wasm_bindgen_test]
    fn wasm_image_body_is_form_data_with_png_file() {
        let query = Query::Image(ImageQuery {
            png: vec![0x89, b'P', b'N', b'G'],
            goods_services: Some("coffee".into()),
        });
        let plan = RequestPlan::build(&query, &endpoints());

        let form: FormData = request_body(&plan.body).unwrap().dyn_into().unwrap();
        let file: File = form.get("image").dyn_into().unwrap();
        assert_eq!(file.name(), "cropped_image.png");
        assert_eq!(file.type_(), "image/png");
        assert_eq!(file.size(), 4.0);
        assert_eq!(form.get("gs_desc").as_string().as_deref(), Some("coffee"));
    }

    #[wasm_bindgen_test]
    fn wasm_image_body_omits_empty_goods_services() {
        let query = Query::Image(ImageQuery { png: vec![1], goods_services: None });
        let plan = RequestPlan::build(&query, &endpoints());

        let form: FormData = request_body(&plan.body).unwrap().dyn_into().unwrap();
        assert!(!form.has("gs_desc"));
        assert!(form.has("image"));
    }

    #[wasm_bindgen_test]
    fn wasm_description_body_is_url_encoded() {
        let query = Query::Description(DescriptionQuery {
            description: "A chef in an apron".into(),
            goods_services: Some("sandwiches".into()),
        });
        let plan = RequestPlan::build(&query, &endpoints());

        let params: UrlSearchParams = request_body(&plan.body).unwrap().dyn_into().unwrap();
        assert_eq!(params.get("description").as_deref(), Some("A chef in an apron"));
        assert_eq!(params.get("gs_desc").as_deref(), Some("sandwiches"));
        assert_eq!(
            String::from(params.to_string()),
            "description=A+chef+in+an+apron&gs_desc=sandwiches"
        );
    }
}
