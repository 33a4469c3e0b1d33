use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_TARGET_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOGIN_LABEL_ID: &str = "loginTag";
pub const DEFAULT_PROFILE_ID: &str = "profile";
pub const DEFAULT_LOGOUT_ID: &str = "logout";
pub const DEFAULT_STOP_CONTROL_ID: &str = "stop";
pub const DEFAULT_HEADER_CHECKBOX_SELECTOR: &str = ".js-check-all";
pub const DEFAULT_ROW_CHECKBOX_SELECTOR: &str = "th input[type=\"checkbox\"]";
pub const DEFAULT_SESSION_ACTIVE_TEXT: &str = "로그인 중";
pub const DEFAULT_PLEASE_LOG_IN_TEXT: &str = "로그인";
pub const DEFAULT_SESSION_ACTIVE_WARNING: &str = "로그인 중입니다.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config json is malformed: {0}")]
    Malformed(String),
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("history target must not be empty")]
    EmptyTargetUrl,
    #[error("history target must be an http(s) url with a host or an absolute path")]
    InvalidTargetUrl,
}

/// Page wiring for one board document. Every field has a default, so a
/// host only needs to override what differs from the stock markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardShellConfig {
    pub login_label_id: String,
    pub profile_id: String,
    pub logout_id: String,
    pub stop_control_id: String,
    pub header_checkbox_selector: String,
    pub row_checkbox_selector: String,
    pub history_target_url: String,
    pub session_active_text: String,
    pub please_log_in_text: String,
    pub session_active_warning: String,
}

impl Default for BoardShellConfig {
    fn default() -> Self {
        Self {
            login_label_id: DEFAULT_LOGIN_LABEL_ID.to_string(),
            profile_id: DEFAULT_PROFILE_ID.to_string(),
            logout_id: DEFAULT_LOGOUT_ID.to_string(),
            stop_control_id: DEFAULT_STOP_CONTROL_ID.to_string(),
            header_checkbox_selector: DEFAULT_HEADER_CHECKBOX_SELECTOR.to_string(),
            row_checkbox_selector: DEFAULT_ROW_CHECKBOX_SELECTOR.to_string(),
            history_target_url: DEFAULT_HISTORY_TARGET_URL.to_string(),
            session_active_text: DEFAULT_SESSION_ACTIVE_TEXT.to_string(),
            please_log_in_text: DEFAULT_PLEASE_LOG_IN_TEXT.to_string(),
            session_active_warning: DEFAULT_SESSION_ACTIVE_WARNING.to_string(),
        }
    }
}

impl BoardShellConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| ConfigError::Malformed(error.to_string()))?;
        config.validate()
    }

    pub fn validate(mut self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("login_label_id", &mut self.login_label_id),
            ("profile_id", &mut self.profile_id),
            ("logout_id", &mut self.logout_id),
            ("stop_control_id", &mut self.stop_control_id),
            ("header_checkbox_selector", &mut self.header_checkbox_selector),
            ("row_checkbox_selector", &mut self.row_checkbox_selector),
            ("session_active_text", &mut self.session_active_text),
            ("please_log_in_text", &mut self.please_log_in_text),
            ("session_active_warning", &mut self.session_active_warning),
        ] {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
            *value = trimmed.to_string();
        }
        self.history_target_url = normalize_target_url(&self.history_target_url)?;
        Ok(self)
    }

    /// Selector form of the login label id, for lookups that take selectors.
    pub fn login_label_selector(&self) -> String {
        format!("#{}", self.login_label_id)
    }

    pub fn stop_control_selector(&self) -> String {
        format!("#{}", self.stop_control_id)
    }

    pub fn profile_selector(&self) -> String {
        format!("#{}", self.profile_id)
    }

    pub fn logout_selector(&self) -> String {
        format!("#{}", self.logout_id)
    }
}

pub fn normalize_target_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyTargetUrl);
    }
    if trimmed.starts_with('/') {
        if trimmed.starts_with("//") {
            return Err(ConfigError::InvalidTargetUrl);
        }
        return Ok(trimmed.to_string());
    }

    let trimmed = trimmed.trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidTargetUrl);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidTargetUrl);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidTargetUrl);
    }
    Ok(trimmed.to_string())
}
