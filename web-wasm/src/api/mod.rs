//! 外部サービス呼び出し（fetch）

pub mod similarity;
pub mod storage;

use wasm_bindgen::JsValue;

/// JS例外を表示用の文字列に
pub(crate) fn js_error(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", error))
}

pub(crate) fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}
