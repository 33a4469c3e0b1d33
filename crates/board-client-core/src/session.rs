use serde::Serialize;

use crate::config::BoardShellConfig;
use crate::error::BoardShellError;
use crate::platform::PageDom;

/// Cookie string read once at page load.
///
/// Only its length matters: a non-empty string is taken to mean a login
/// session is probably present. The value is never parsed or validated.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    cookie: String,
}

impl std::fmt::Debug for SessionSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSnapshot")
            .field("len", &self.len())
            .finish()
    }
}

impl SessionSnapshot {
    pub fn capture(cookie: impl Into<String>) -> Self {
        let snapshot = Self {
            cookie: cookie.into(),
        };
        tracing::debug!(cookie_len = snapshot.len(), "captured session snapshot");
        snapshot
    }

    pub fn empty() -> Self {
        Self {
            cookie: String::new(),
        }
    }

    /// Length in UTF-16 code units, matching `document.cookie.length`.
    pub fn len(&self) -> usize {
        self.cookie.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cookie.is_empty()
    }

    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    pub fn presence(&self) -> SessionPresence {
        if self.is_present() {
            SessionPresence::Guarded
        } else {
            SessionPresence::Unguarded
        }
    }
}

/// Guard state fixed at load; it never changes for the page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPresence {
    Guarded,
    Unguarded,
}

impl SessionPresence {
    pub fn is_guarded(self) -> bool {
        matches!(self, Self::Guarded)
    }
}

pub fn login_label_text(presence: SessionPresence, config: &BoardShellConfig) -> &str {
    match presence {
        SessionPresence::Guarded => &config.session_active_text,
        SessionPresence::Unguarded => &config.please_log_in_text,
    }
}

/// Writes the login label text once. Returns the text that was written.
pub fn reflect_login_label(
    dom: &mut impl PageDom,
    snapshot: &SessionSnapshot,
    config: &BoardShellConfig,
) -> Result<String, BoardShellError> {
    let text = login_label_text(snapshot.presence(), config).to_string();
    dom.set_text(&config.login_label_selector(), &text)?;
    tracing::info!(
        presence = ?snapshot.presence(),
        label = %text,
        "login label reflected"
    );
    Ok(text)
}
