//! Cloudinary 上传按钮
//!
//! 头像上传走外部的 Cloudinary Upload Widget（由 index.html 引入
//! 其 SDK），这里只做一层绑定：打开组件，拿回托管后的图片 URL。
//! SDK 未加载时按钮无效并在控制台报错。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CLOUD_NAME: &str = "nimbus-capstone";
const UPLOAD_PRESET: &str = "xohgc3hx";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(inline_js = "export function open_upload_widget(cloud_name, preset, on_done) {
    if (!window.cloudinary) {
        console.error('[Upload] Cloudinary SDK not loaded');
        return;
    }
    const widget = window.cloudinary.createUploadWidget(
        { cloudName: cloud_name, uploadPreset: preset, maxFiles: 1 },
        (error, result) => {
            if (error) {
                console.error('[Upload] upload error:', error);
                return;
            }
            if (result && result.event === 'success') {
                on_done(result.info.secure_url);
            }
        }
    );
    widget.open();
}")]
extern "C" {
    fn open_upload_widget(cloud_name: &str, preset: &str, on_done: &js_sys::Function);
}

#[cfg(not(target_arch = "wasm32"))]
fn open_upload_widget(_cloud_name: &str, _preset: &str, _on_done: &js_sys::Function) {}

#[component]
pub fn UploadWidget(#[prop(into)] on_upload: Callback<String>) -> impl IntoView {
    let (label, set_label) = signal("Profile Picture".to_string());

    let open = move |_| {
        let callback = Closure::<dyn FnMut(String)>::new(move |url: String| {
            on_upload.run(url);
            set_label.set("Uploaded!".to_string());
        });
        open_upload_widget(CLOUD_NAME, UPLOAD_PRESET, callback.as_ref().unchecked_ref());
        // 回调要在 widget 的生命周期内保持存活
        callback.forget();
    };

    view! {
        <button type="button" class="btn btn-sm btn-primary rounded-full" on:click=open>
            {label}
        </button>
    }
}
