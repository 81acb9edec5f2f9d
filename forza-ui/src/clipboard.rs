//! Clipboard access and the "copied" flash used by copy buttons

use leptos::*;

use crate::state::chat::COPIED_RESET_MS;

pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard error: {:?}", e))
}

/// Copy `text`, set `flag` to `key` and clear it again after two seconds
pub fn copy_with_flash<K>(text: String, key: K, flag: RwSignal<Option<K>>)
where
    K: Clone + PartialEq + 'static,
{
    spawn_local(async move {
        if let Err(e) = copy_text(&text).await {
            web_sys::console::error_1(&e.into());
            return;
        }

        flag.set(Some(key.clone()));
        gloo_timers::callback::Timeout::new(COPIED_RESET_MS, move || {
            // A newer copy owns the flag now
            if flag.get_untracked().as_ref() == Some(&key) {
                flag.set(None);
            }
        })
        .forget();
    });
}
