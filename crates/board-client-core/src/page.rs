//! Load-time wiring of a board page and dispatch of its events.

use serde::Serialize;

use crate::config::BoardShellConfig;
use crate::error::BoardShellError;
use crate::guard::NavigationGuard;
use crate::history::BackNavigationSuppressor;
use crate::listeners::{ListenerId, ListenerRole, ListenerSet};
use crate::platform::{
    EventContext, EventDisposition, EventKind, ListenerTarget, PagePlatform,
};
use crate::selection::BulkSelectionToggle;
use crate::session::{SessionPresence, SessionSnapshot, reflect_login_label};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDiagnostics {
    pub presence: SessionPresence,
    pub cookie_len: usize,
    pub label_text: Option<String>,
    pub missing_elements: Vec<String>,
    pub unwired_controls: Vec<String>,
    pub blocked_clicks: u64,
    pub forward_steps: u64,
    pub back_suppression_armed: bool,
    pub active_listeners: usize,
    pub failure_count: u64,
    pub last_error: Option<String>,
}

#[derive(Debug)]
pub struct BoardPage {
    config: BoardShellConfig,
    snapshot: SessionSnapshot,
    label_text: Option<String>,
    guard: NavigationGuard,
    selection: BulkSelectionToggle,
    suppressor: BackNavigationSuppressor,
    listeners: ListenerSet,
    missing_elements: Vec<String>,
    unwired_controls: Vec<String>,
    failure_count: u64,
    last_error: Option<String>,
    unreported_failures: Vec<String>,
}

impl BoardPage {
    /// Runs the load phase: snapshot the cookie, reflect the label, then
    /// attach click listeners. Missing elements are logged and skipped.
    pub fn load(platform: &mut impl PagePlatform, config: BoardShellConfig) -> Self {
        let snapshot = match platform.cookie_string() {
            Ok(cookie) => SessionSnapshot::capture(cookie),
            Err(error) => {
                tracing::warn!(%error, "cookie store unreadable, treating session as absent");
                SessionSnapshot::empty()
            }
        };

        let mut page = Self {
            guard: NavigationGuard::new(
                snapshot.presence(),
                config.session_active_warning.clone(),
            ),
            selection: BulkSelectionToggle::new(
                config.header_checkbox_selector.clone(),
                config.row_checkbox_selector.clone(),
            ),
            suppressor: BackNavigationSuppressor::new(config.history_target_url.clone()),
            listeners: ListenerSet::new(),
            label_text: None,
            missing_elements: Vec::new(),
            unwired_controls: Vec::new(),
            failure_count: 0,
            last_error: None,
            unreported_failures: Vec::new(),
            snapshot,
            config,
        };

        match reflect_login_label(platform, &page.snapshot, &page.config) {
            Ok(text) => page.label_text = Some(text),
            Err(error) => page.record_failure("reflect login label", &error),
        }

        for selector in [page.config.profile_selector(), page.config.logout_selector()] {
            if platform.element_exists(&selector) {
                tracing::debug!(%selector, "control present but has no behaviour");
                page.unwired_controls.push(selector);
            }
        }

        let bindings = [
            (
                ListenerRole::HeaderCheckbox,
                page.config.header_checkbox_selector.clone(),
            ),
            (ListenerRole::LoginLabel, page.config.login_label_selector()),
            (ListenerRole::StopControl, page.config.stop_control_selector()),
        ];
        for (role, selector) in bindings {
            page.attach_click(platform, role, selector);
        }

        tracing::info!(
            presence = ?page.snapshot.presence(),
            listeners = page.listeners.len(),
            missing = page.missing_elements.len(),
            "board page loaded"
        );
        page
    }

    fn attach_click(
        &mut self,
        platform: &mut impl PagePlatform,
        role: ListenerRole,
        selector: String,
    ) {
        if !platform.element_exists(&selector) {
            self.record_failure(
                "attach click listener",
                &BoardShellError::element_not_found(selector),
            );
            return;
        }
        if let Err(error) = self.listeners.register(
            platform,
            role,
            ListenerTarget::Element(selector),
            EventKind::Click,
        ) {
            self.record_failure("attach click listener", &error);
        }
    }

    fn record_failure(&mut self, action: &str, error: &BoardShellError) {
        tracing::warn!(%error, action, "board page step skipped");
        if let BoardShellError::ElementNotFound { selector } = error {
            if !self.missing_elements.contains(selector) {
                self.missing_elements.push(selector.clone());
            }
        }
        let message = format!("{action}: {error}");
        self.failure_count += 1;
        self.unreported_failures.push(message.clone());
        self.last_error = Some(message);
    }

    /// Failures recorded since the last call, oldest first. Hosts without a
    /// tracing subscriber surface these themselves.
    pub fn take_unreported_failures(&mut self) -> Vec<String> {
        std::mem::take(&mut self.unreported_failures)
    }

    /// Routes a fired listener to its component and says whether the
    /// browser default must be suppressed. Unknown ids pass through.
    pub fn dispatch(
        &mut self,
        platform: &mut impl PagePlatform,
        listener: ListenerId,
        context: EventContext,
    ) -> EventDisposition {
        let Some(role) = self.listeners.role_of(listener) else {
            tracing::debug!(listener = listener.0, "event for detached listener ignored");
            return EventDisposition::Continue;
        };

        match role {
            ListenerRole::HeaderCheckbox => {
                if let Err(error) = self
                    .selection
                    .on_header_click(platform, context.target_checked)
                {
                    self.record_failure("toggle row checkboxes", &error);
                }
                EventDisposition::Continue
            }
            ListenerRole::LoginLabel => self.guard.on_label_click(platform),
            ListenerRole::StopControl => {
                match self.suppressor.on_stop_click(platform) {
                    Ok(outcome) if outcome.install_back_handler => {
                        if let Err(error) = self.listeners.register(
                            platform,
                            ListenerRole::BackNavigation,
                            ListenerTarget::Window,
                            EventKind::PopState,
                        ) {
                            self.record_failure("attach popstate listener", &error);
                        }
                    }
                    Ok(_) => {}
                    Err(error) => self.record_failure("pin history entry", &error),
                }
                EventDisposition::Continue
            }
            ListenerRole::BackNavigation => {
                if let Err(error) = self.suppressor.on_back_navigation(platform) {
                    self.record_failure("revert back navigation", &error);
                }
                EventDisposition::Continue
            }
        }
    }

    /// Removes every listener this page attached. Safe to call twice.
    pub fn detach(&mut self, platform: &mut impl PagePlatform) -> usize {
        let detached = self.listeners.detach_all(platform);
        tracing::info!(detached, "board page listeners detached");
        detached
    }

    pub fn config(&self) -> &BoardShellConfig {
        &self.config
    }

    pub fn presence(&self) -> SessionPresence {
        self.snapshot.presence()
    }

    pub fn diagnostics(&self) -> PageDiagnostics {
        PageDiagnostics {
            presence: self.snapshot.presence(),
            cookie_len: self.snapshot.len(),
            label_text: self.label_text.clone(),
            missing_elements: self.missing_elements.clone(),
            unwired_controls: self.unwired_controls.clone(),
            blocked_clicks: self.guard.blocked_clicks(),
            forward_steps: self.suppressor.forward_steps(),
            back_suppression_armed: self.suppressor.is_armed(),
            active_listeners: self.listeners.len(),
            failure_count: self.failure_count,
            last_error: self.last_error.clone(),
        }
    }
}
