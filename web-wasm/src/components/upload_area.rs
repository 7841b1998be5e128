//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};
use trademark_search_common::{is_supported_image_name, IMAGE_EXTENSIONS};

/// 読み込んだ画像
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub file_name: String,
    pub data_url: String,
}

#[component]
pub fn UploadArea<F>(
    image: ReadSignal<Option<LoadedImage>>,
    on_image_loaded: F,
) -> impl IntoView
where
    F: Fn(LoadedImage) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file = move |file: File| {
        let name = file.name();
        if !is_supported_image_name(&name) {
            set_error.set(Some(format!(
                "Unsupported file: {} (allowed: {})",
                name,
                IMAGE_EXTENSIONS.join(", ")
            )));
            return;
        }
        set_error.set(None);
        if let Err(e) = read_file(file, on_image_loaded.clone()) {
            set_error.set(Some(crate::api::js_error(&e)));
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_is_dragover.set(true);
            }
            on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
            on:click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            <input
                node_ref=input_ref
                type="file"
                accept=".jpg,.jpeg,.png,.gif,.bmp"
                style="display: none"
                on:change=on_change
            />
            <div class="upload-icon">"🖼"</div>
            <p>
                {move || match image.get() {
                    Some(loaded) => loaded.file_name,
                    None => "Upload an image (drag & drop or click)".to_string(),
                }}
            </p>
            <p class="text-muted">"Supported: JPG, JPEG, PNG, GIF, BMP"</p>
        </div>
        {move || error.get().map(|message| view! { <div class="alert alert-warning">{message}</div> })}
    }
}

fn read_file<F>(file: File, on_image_loaded: F) -> Result<(), JsValue>
where
    F: Fn(LoadedImage) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new()?;

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_image_loaded(LoadedImage {
                file_name: file_name.clone(),
                data_url,
            });
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_data_url(&file)
}
