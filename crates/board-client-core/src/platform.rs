//! Seams between page logic and the browser.
//!
//! Lookups take CSS selectors; element ids are passed as `#id`.

use serde::Serialize;

use crate::error::BoardShellError;
use crate::listeners::ListenerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    PopState,
}

impl EventKind {
    pub fn as_dom_event(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::PopState => "popstate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Every element matching the selector at bind time.
    Element(String),
    Window,
}

impl ListenerTarget {
    pub fn describe(&self) -> String {
        match self {
            Self::Element(selector) => selector.clone(),
            Self::Window => "window".to_string(),
        }
    }
}

/// What the browser should do with the event after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDisposition {
    Continue,
    PreventDefault,
}

/// What the browser reported about the event that reached a listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventContext {
    /// Checked state of the event target, when it is a checkbox input.
    pub target_checked: Option<bool>,
}

impl EventContext {
    pub fn checkbox(checked: bool) -> Self {
        Self {
            target_checked: Some(checked),
        }
    }
}

pub trait CookieSource {
    /// The document's full cookie string, `""` when there are none.
    fn cookie_string(&self) -> Result<String, BoardShellError>;
}

pub trait PageDom {
    fn element_exists(&self, selector: &str) -> bool;
    fn set_text(&mut self, selector: &str, text: &str) -> Result<(), BoardShellError>;
    /// Checked state of the first checkbox matching `selector`.
    fn is_checked(&self, selector: &str) -> Result<bool, BoardShellError>;
    /// Sets every checkbox matching `selector`; returns how many were written.
    fn set_all_checked(&mut self, selector: &str, checked: bool) -> Result<usize, BoardShellError>;
}

pub trait Notifier {
    fn alert(&mut self, message: &str);
}

pub trait HistoryApi {
    /// Adds a same-document entry for `url` above the current one.
    fn push_state(&mut self, url: &str) -> Result<(), BoardShellError>;
    fn forward(&mut self) -> Result<(), BoardShellError>;
}

pub trait EventBinder {
    fn bind(
        &mut self,
        target: &ListenerTarget,
        kind: EventKind,
        id: ListenerId,
    ) -> Result<(), BoardShellError>;
    fn unbind(&mut self, id: ListenerId);
}

pub trait PagePlatform: CookieSource + PageDom + Notifier + HistoryApi + EventBinder {}

impl<T> PagePlatform for T where T: CookieSource + PageDom + Notifier + HistoryApi + EventBinder {}
