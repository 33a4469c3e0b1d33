use std::collections::HashMap;

use board_client_core::{
    BoardShellError, CookieSource, EventBinder, EventKind, HistoryApi, ListenerTarget, Notifier,
    PageDom,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlInputElement, Window};

use super::*;

struct BoundListener {
    targets: Vec<web_sys::EventTarget>,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// `web-sys` implementation of the page traits. Owns the closures of every
/// attached listener so dropping one also releases its JS callback.
pub(super) struct WebPlatform {
    window: Window,
    document: Document,
    bound: HashMap<ListenerId, BoundListener>,
}

impl WebPlatform {
    pub(super) fn from_window() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        Ok(Self {
            window,
            document,
            bound: HashMap::new(),
        })
    }

    fn query(&self, selector: &str) -> Result<Element, BoardShellError> {
        self.document
            .query_selector(selector)
            .map_err(|error| BoardShellError::Platform(js_error_text(&error)))?
            .ok_or_else(|| BoardShellError::element_not_found(selector))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, BoardShellError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|error| BoardShellError::Platform(js_error_text(&error)))?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn history(&self) -> Result<web_sys::History, BoardShellError> {
        self.window
            .history()
            .map_err(|error| BoardShellError::History(js_error_text(&error)))
    }
}

impl CookieSource for WebPlatform {
    fn cookie_string(&self) -> Result<String, BoardShellError> {
        let document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| BoardShellError::Platform("document is not an HTML document".to_string()))?;
        document
            .cookie()
            .map_err(|error| BoardShellError::Platform(js_error_text(&error)))
    }
}

impl PageDom for WebPlatform {
    fn element_exists(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn set_text(&mut self, selector: &str, text: &str) -> Result<(), BoardShellError> {
        let element = self.query(selector)?;
        match element.dyn_ref::<HtmlElement>() {
            Some(element) => element.set_inner_text(text),
            None => element.set_text_content(Some(text)),
        }
        Ok(())
    }

    fn is_checked(&self, selector: &str) -> Result<bool, BoardShellError> {
        self.query(selector)?
            .dyn_into::<HtmlInputElement>()
            .map(|input| input.checked())
            .map_err(|_| BoardShellError::NotACheckbox {
                selector: selector.to_string(),
            })
    }

    fn set_all_checked(&mut self, selector: &str, checked: bool) -> Result<usize, BoardShellError> {
        let mut written = 0;
        for element in self.query_all(selector)? {
            let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            input.set_checked(checked);
            written += 1;
        }
        Ok(written)
    }
}

impl Notifier for WebPlatform {
    fn alert(&mut self, message: &str) {
        if let Err(error) = self.window.alert_with_message(message) {
            console_warn(&format!("alert failed: {}", js_error_text(&error)));
        }
    }
}

impl HistoryApi for WebPlatform {
    fn push_state(&mut self, url: &str) -> Result<(), BoardShellError> {
        self.history()?
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|error| BoardShellError::History(js_error_text(&error)))
    }

    fn forward(&mut self) -> Result<(), BoardShellError> {
        self.history()?
            .forward()
            .map_err(|error| BoardShellError::History(js_error_text(&error)))
    }
}

impl EventBinder for WebPlatform {
    fn bind(
        &mut self,
        target: &ListenerTarget,
        kind: EventKind,
        id: ListenerId,
    ) -> Result<(), BoardShellError> {
        let targets: Vec<web_sys::EventTarget> = match target {
            ListenerTarget::Element(selector) => {
                let elements = self.query_all(selector)?;
                if elements.is_empty() {
                    return Err(BoardShellError::element_not_found(selector.clone()));
                }
                elements.into_iter().map(Into::into).collect()
            }
            ListenerTarget::Window => vec![self.window.clone().into()],
        };

        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
            handle_listener_event(id, event);
        }));
        let event = kind.as_dom_event();
        for (attached, event_target) in targets.iter().enumerate() {
            if let Err(error) = event_target
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                for earlier in targets.iter().take(attached) {
                    let _ = earlier.remove_event_listener_with_callback(
                        event,
                        callback.as_ref().unchecked_ref(),
                    );
                }
                return Err(BoardShellError::Binding {
                    target: target.describe(),
                    reason: js_error_text(&error),
                });
            }
        }

        self.bound.insert(
            id,
            BoundListener {
                targets,
                event,
                callback,
            },
        );
        Ok(())
    }

    fn unbind(&mut self, id: ListenerId) {
        let Some(listener) = self.bound.remove(&id) else {
            return;
        };
        for event_target in &listener.targets {
            let _ = event_target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
