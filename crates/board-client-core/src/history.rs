use serde::Serialize;

use crate::error::BoardShellError;
use crate::platform::HistoryApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuppressorOutcome {
    /// True the first time: the caller must attach the popstate listener.
    pub install_back_handler: bool,
}

/// Pins the user on the current page once the stop control is used.
///
/// The target is pushed as a same-document entry, so a back press lands on
/// the entry below it and fires `popstate` instead of unloading the page.
#[derive(Debug, Clone)]
pub struct BackNavigationSuppressor {
    target_url: String,
    armed: bool,
    forward_steps: u64,
}

impl BackNavigationSuppressor {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            armed: false,
            forward_steps: 0,
        }
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn forward_steps(&self) -> u64 {
        self.forward_steps
    }

    pub fn on_stop_click(
        &mut self,
        history: &mut impl HistoryApi,
    ) -> Result<SuppressorOutcome, BoardShellError> {
        history.push_state(&self.target_url)?;
        let install_back_handler = !self.armed;
        self.armed = true;
        tracing::info!(
            target_url = %self.target_url,
            install_back_handler,
            "history entry pinned"
        );
        Ok(SuppressorOutcome {
            install_back_handler,
        })
    }

    /// Called on every popstate after arming; never disarms itself.
    pub fn on_back_navigation(
        &mut self,
        history: &mut impl HistoryApi,
    ) -> Result<(), BoardShellError> {
        if !self.armed {
            return Ok(());
        }
        history.forward()?;
        self.forward_steps += 1;
        tracing::debug!(
            forward_steps = self.forward_steps,
            "back navigation reverted"
        );
        Ok(())
    }
}
