//! Page logic for the board web shell.
//!
//! Everything here is written against the traits in [`platform`], so the
//! same code drives the real browser (see the `board-web-shell` crate) and
//! the in-memory fake used by tests.

pub mod config;
pub mod error;
pub mod guard;
pub mod history;
pub mod listeners;
pub mod page;
pub mod platform;
pub mod selection;
pub mod session;

#[cfg(test)]
mod fake;

pub use config::{BoardShellConfig, ConfigError, normalize_target_url};
pub use error::BoardShellError;
pub use guard::NavigationGuard;
pub use history::{BackNavigationSuppressor, SuppressorOutcome};
pub use listeners::{ListenerId, ListenerRole, ListenerSet};
pub use page::{BoardPage, PageDiagnostics};
pub use platform::{
    CookieSource, EventBinder, EventContext, EventDisposition, EventKind, HistoryApi,
    ListenerTarget, Notifier, PageDom, PagePlatform,
};
pub use selection::{BulkSelectionToggle, SelectionOutcome};
pub use session::{SessionPresence, SessionSnapshot, login_label_text, reflect_login_label};
