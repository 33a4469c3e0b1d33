use board_client_core::EventContext;
use wasm_bindgen::JsCast;

use super::*;

pub(super) fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("{CONSOLE_PREFIX} {message}")));
}

/// Serialized `window.__BOARD_SHELL_CONFIG__`, if the host set one.
pub(super) fn read_config_global() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    js_sys::JSON::stringify(&value).ok()?.as_string()
}

pub(super) fn js_error_text(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown javascript error".to_string())
}

/// Reads the clicked checkbox's state so the header that fired is the one
/// that drives the rows.
pub(super) fn event_context(event: &web_sys::Event) -> EventContext {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .filter(|input| input.type_() == "checkbox")
        .map_or_else(EventContext::default, |input| {
            EventContext::checkbox(input.checked())
        })
}
