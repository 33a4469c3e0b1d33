use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardShellError {
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },
    #[error("element is not a checkbox input: {selector}")]
    NotACheckbox { selector: String },
    #[error("history api call failed: {0}")]
    History(String),
    #[error("event binding failed for {target}: {reason}")]
    Binding { target: String, reason: String },
    #[error("browser platform unavailable: {0}")]
    Platform(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BoardShellError {
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    pub fn is_element_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}
