use crate::platform::{EventDisposition, Notifier};
use crate::session::SessionPresence;

/// Blocks the login label's navigation while a session looks active.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    presence: SessionPresence,
    warning: String,
    blocked_clicks: u64,
}

impl NavigationGuard {
    pub fn new(presence: SessionPresence, warning: impl Into<String>) -> Self {
        Self {
            presence,
            warning: warning.into(),
            blocked_clicks: 0,
        }
    }

    pub fn presence(&self) -> SessionPresence {
        self.presence
    }

    pub fn blocked_clicks(&self) -> u64 {
        self.blocked_clicks
    }

    pub fn on_label_click(&mut self, notifier: &mut impl Notifier) -> EventDisposition {
        match self.presence {
            SessionPresence::Guarded => {
                notifier.alert(&self.warning);
                self.blocked_clicks += 1;
                tracing::debug!(
                    blocked_clicks = self.blocked_clicks,
                    "login navigation blocked"
                );
                EventDisposition::PreventDefault
            }
            SessionPresence::Unguarded => EventDisposition::Continue,
        }
    }
}
