//! In-memory page used by the unit tests.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use crate::error::BoardShellError;
use crate::listeners::ListenerId;
use crate::platform::{
    CookieSource, EventBinder, EventContext, EventKind, HistoryApi, ListenerTarget, Notifier,
    PageDom,
};

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeElement {
    pub(crate) text: String,
    pub(crate) checkboxes: Vec<bool>,
}

#[derive(Debug)]
pub(crate) struct FakePage {
    pub(crate) cookie: String,
    pub(crate) elements: HashMap<String, FakeElement>,
    pub(crate) alerts: Vec<String>,
    pub(crate) history: Vec<String>,
    pub(crate) history_index: usize,
    /// First entry owned by this document; lower entries are earlier pages.
    pub(crate) document_start: usize,
    pub(crate) left_document: bool,
    pub(crate) forward_calls: usize,
    pub(crate) cookie_reads: Cell<usize>,
    bound: BTreeMap<ListenerId, (ListenerTarget, EventKind)>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self {
            cookie: String::new(),
            elements: HashMap::new(),
            alerts: Vec::new(),
            history: vec!["http://localhost:8080/list".to_string()],
            history_index: 0,
            document_start: 0,
            left_document: false,
            forward_calls: 0,
            cookie_reads: Cell::new(0),
            bound: BTreeMap::new(),
        }
    }
}

impl FakePage {
    pub(crate) fn with_cookie(mut self, cookie: &str) -> Self {
        self.cookie = cookie.to_string();
        self
    }

    pub(crate) fn with_element(mut self, selector: &str) -> Self {
        self.elements
            .insert(selector.to_string(), FakeElement::default());
        self
    }

    pub(crate) fn with_checkboxes(mut self, selector: &str, states: &[bool]) -> Self {
        self.elements.insert(
            selector.to_string(),
            FakeElement {
                text: String::new(),
                checkboxes: states.to_vec(),
            },
        );
        self
    }

    /// Board markup with every control the stock config expects.
    pub(crate) fn board(cookie: &str, rows: &[bool]) -> Self {
        Self::default()
            .with_cookie(cookie)
            .with_element("#loginTag")
            .with_element("#profile")
            .with_element("#logout")
            .with_element("#stop")
            .with_checkboxes(".js-check-all", &[false])
            .with_checkboxes("th input[type=\"checkbox\"]", rows)
    }

    pub(crate) fn with_history(mut self, entries: &[&str], index: usize) -> Self {
        self.history = entries.iter().map(|entry| (*entry).to_string()).collect();
        self.history_index = index;
        self.document_start = index;
        self
    }

    pub(crate) fn text_of(&self, selector: &str) -> Option<&str> {
        self.elements
            .get(selector)
            .map(|element| element.text.as_str())
    }

    pub(crate) fn checkboxes_of(&self, selector: &str) -> Vec<bool> {
        self.elements
            .get(selector)
            .map(|element| element.checkboxes.clone())
            .unwrap_or_default()
    }

    pub(crate) fn current_entry(&self) -> &str {
        self.history
            .get(self.history_index)
            .map_or("", String::as_str)
    }

    pub(crate) fn bound_listener_count(&self) -> usize {
        self.bound.len()
    }

    pub(crate) fn listeners_for(&self, target: &ListenerTarget, kind: EventKind) -> Vec<ListenerId> {
        self.bound
            .iter()
            .filter(|(_, (bound_target, bound_kind))| bound_target == target && *bound_kind == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Applies the browser's default toggle to every header checkbox and
    /// returns the listeners a click would reach.
    pub(crate) fn toggle_header(&mut self, selector: &str, checked: bool) -> Vec<ListenerId> {
        if let Some(element) = self.elements.get_mut(selector) {
            for state in &mut element.checkboxes {
                *state = checked;
            }
        }
        self.listeners_for(&ListenerTarget::Element(selector.to_string()), EventKind::Click)
    }

    /// Toggles only the header checkbox at `position`, like a click on one
    /// of several matching elements.
    pub(crate) fn toggle_header_at(
        &mut self,
        selector: &str,
        position: usize,
        checked: bool,
    ) -> (Vec<ListenerId>, EventContext) {
        if let Some(state) = self
            .elements
            .get_mut(selector)
            .and_then(|element| element.checkboxes.get_mut(position))
        {
            *state = checked;
        }
        let listeners =
            self.listeners_for(&ListenerTarget::Element(selector.to_string()), EventKind::Click);
        (listeners, EventContext::checkbox(checked))
    }

    /// Steps back one entry like the browser back button. Popstate only
    /// fires while the destination still belongs to this document; going
    /// below `document_start` unloads the page instead.
    pub(crate) fn press_back(&mut self) -> Vec<ListenerId> {
        if self.left_document || self.history_index == 0 {
            return Vec::new();
        }
        self.history_index -= 1;
        if self.history_index < self.document_start {
            self.left_document = true;
            return Vec::new();
        }
        self.listeners_for(&ListenerTarget::Window, EventKind::PopState)
    }
}

impl CookieSource for FakePage {
    fn cookie_string(&self) -> Result<String, BoardShellError> {
        self.cookie_reads.set(self.cookie_reads.get() + 1);
        Ok(self.cookie.clone())
    }
}

impl PageDom for FakePage {
    fn element_exists(&self, selector: &str) -> bool {
        self.elements.contains_key(selector)
    }

    fn set_text(&mut self, selector: &str, text: &str) -> Result<(), BoardShellError> {
        let element = self
            .elements
            .get_mut(selector)
            .ok_or_else(|| BoardShellError::element_not_found(selector))?;
        element.text = text.to_string();
        Ok(())
    }

    fn is_checked(&self, selector: &str) -> Result<bool, BoardShellError> {
        let element = self
            .elements
            .get(selector)
            .ok_or_else(|| BoardShellError::element_not_found(selector))?;
        element
            .checkboxes
            .first()
            .copied()
            .ok_or_else(|| BoardShellError::NotACheckbox {
                selector: selector.to_string(),
            })
    }

    fn set_all_checked(&mut self, selector: &str, checked: bool) -> Result<usize, BoardShellError> {
        let Some(element) = self.elements.get_mut(selector) else {
            return Ok(0);
        };
        for state in &mut element.checkboxes {
            *state = checked;
        }
        Ok(element.checkboxes.len())
    }
}

impl Notifier for FakePage {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl HistoryApi for FakePage {
    fn push_state(&mut self, url: &str) -> Result<(), BoardShellError> {
        if self.left_document {
            return Err(BoardShellError::History("document unloaded".to_string()));
        }
        self.history.truncate(self.history_index + 1);
        self.history.push(url.to_string());
        self.history_index = self.history.len() - 1;
        Ok(())
    }

    fn forward(&mut self) -> Result<(), BoardShellError> {
        self.forward_calls += 1;
        if !self.left_document && self.history_index + 1 < self.history.len() {
            self.history_index += 1;
        }
        Ok(())
    }
}

impl EventBinder for FakePage {
    fn bind(
        &mut self,
        target: &ListenerTarget,
        kind: EventKind,
        id: ListenerId,
    ) -> Result<(), BoardShellError> {
        if let ListenerTarget::Element(selector) = target {
            if !self.elements.contains_key(selector) {
                return Err(BoardShellError::element_not_found(selector.clone()));
            }
        }
        self.bound.insert(id, (target.clone(), kind));
        Ok(())
    }

    fn unbind(&mut self, id: ListenerId) {
        self.bound.remove(&id);
    }
}
