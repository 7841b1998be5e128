//! 切り抜きエリア
//!
//! 4本のスライダー（画像に対する%）で矩形を決め、canvasでプレビューしつつPNGにする。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use trademark_search_common::CropRect;
use crate::api::js_error;
use super::upload_area::LoadedImage;

/// スライダーの値（画像に対する%）
///
/// 検索ページ側で持ち、モードを切り替えても切り抜き範囲を残す
#[derive(Clone, Copy)]
pub struct CropSliders {
    pub left: RwSignal<f64>,
    pub top: RwSignal<f64>,
    pub width: RwSignal<f64>,
    pub height: RwSignal<f64>,
}

impl CropSliders {
    pub fn new() -> Self {
        Self {
            left: RwSignal::new(0.0),
            top: RwSignal::new(0.0),
            width: RwSignal::new(100.0),
            height: RwSignal::new(100.0),
        }
    }

    /// 画像全体に戻す
    pub fn reset(&self) {
        self.left.set(0.0);
        self.top.set(0.0);
        self.width.set(100.0);
        self.height.set(100.0);
    }

    /// 現在値をピクセル矩形に変換（変更を追跡する）
    pub fn rect_for(&self, image_width: u32, image_height: u32) -> Result<CropRect, String> {
        CropRect::from_percent(
            image_width,
            image_height,
            self.left.get(),
            self.top.get(),
            self.width.get(),
            self.height.get(),
        )
        .map_err(|e| e.to_string())
    }
}

impl Default for CropSliders {
    fn default() -> Self {
        Self::new()
    }
}

/// "data:image/png;base64,..." の本体をデコード
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, String> {
    let (_, payload) = data_url
        .split_once(',')
        .ok_or_else(|| "invalid data URL".to_string())?;
    STANDARD.decode(payload).map_err(|e| e.to_string())
}

fn load_element(
    data_url: &str,
    set_image: WriteSignal<Option<HtmlImageElement>, LocalStorage>,
) -> Result<(), JsValue> {
    let element = HtmlImageElement::new()?;
    let loaded = element.clone();
    let onload = Closure::once_into_js(move || set_image.set(Some(loaded)));
    element.set_onload(Some(onload.unchecked_ref()));
    element.set_src(data_url);
    Ok(())
}

fn draw_crop(element: &HtmlImageElement, canvas: &HtmlCanvasElement, rect: CropRect) -> Result<Vec<u8>, String> {
    canvas.set_width(rect.width);
    canvas.set_height(rect.height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| js_error(&e))?
        .ok_or_else(|| "2d context is not available".to_string())?
        .dyn_into()
        .map_err(|_| "2d context is not available".to_string())?;

    context
        .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            element,
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
            0.0,
            0.0,
            rect.width as f64,
            rect.height as f64,
        )
        .map_err(|e| js_error(&e))?;

    let data_url = canvas.to_data_url().map_err(|e| js_error(&e))?;
    decode_data_url(&data_url)
}

#[component]
pub fn CropArea(
    source: ReadSignal<Option<LoadedImage>>,
    cropped_png: RwSignal<Option<Vec<u8>>>,
    sliders: CropSliders,
) -> impl IntoView {
    let (image, set_image) = signal_local(None::<HtmlImageElement>);
    let (error, set_error) = signal(None::<String>);
    let (rect, set_rect) = signal(None::<CropRect>);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // 画像が変わったら読み込み直す
    Effect::new(move |_| {
        set_image.set(None);
        cropped_png.set(None);
        if let Some(loaded) = source.get() {
            if let Err(e) = load_element(&loaded.data_url, set_image) {
                set_error.set(Some(js_error(&e)));
            }
        }
    });

    // スライダー・画像の変更ごとに切り抜き直す
    Effect::new(move |_| {
        let (Some(element), Some(canvas)) = (image.get(), canvas_ref.get()) else {
            return;
        };

        let result = sliders
            .rect_for(element.natural_width(), element.natural_height())
            .and_then(|r| draw_crop(&element, &canvas, r).map(|png| (r, png)));

        match result {
            Ok((r, png)) => {
                set_error.set(None);
                set_rect.set(Some(r));
                cropped_png.set(Some(png));
            }
            Err(message) => {
                set_rect.set(None);
                set_error.set(Some(message));
                cropped_png.set(None);
            }
        }
    });

    let slider = move |label: &'static str, value: RwSignal<f64>| {
        view! {
            <label class="slider">
                <span class="slider-label">{label}</span>
                <input
                    type="range"
                    min="0"
                    max="100"
                    step="1"
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            value.set(v);
                        }
                    }
                />
                <span class="slider-value">{move || format!("{:.0}%", value.get())}</span>
            </label>
        }
    };

    view! {
        <div class="crop-area">
            <div class="crop-controls">
                {slider("Left", sliders.left)}
                {slider("Top", sliders.top)}
                {slider("Width", sliders.width)}
                {slider("Height", sliders.height)}
            </div>
            <div class="crop-preview">
                <canvas node_ref=canvas_ref />
                <p class="text-muted">
                    {move || rect.get().map(|r| format!("Cropped: {}x{} at ({}, {})", r.width, r.height, r.x, r.y))}
                </p>
            </div>
            {move || error.get().map(|message| view! { <div class="alert alert-warning">{message}</div> })}
        </div>
    }
}
