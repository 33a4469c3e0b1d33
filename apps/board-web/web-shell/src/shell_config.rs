use board_client_core::BoardShellConfig;

/// Where the active config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellConfigSource {
    Defaults,
    Host,
    /// The host config was present but unusable.
    Rejected(String),
}

impl ShellConfigSource {
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Defaults | Self::Host => None,
        }
    }
}

/// Resolves the page config from the serialized host global, falling back
/// to defaults when it is absent or invalid.
pub fn resolve_shell_config(raw: Option<&str>) -> (BoardShellConfig, ShellConfigSource) {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty() && *raw != "null") else {
        return (BoardShellConfig::default(), ShellConfigSource::Defaults);
    };
    match BoardShellConfig::from_json_str(raw) {
        Ok(config) => {
            tracing::debug!("board shell config loaded from host");
            (config, ShellConfigSource::Host)
        }
        Err(error) => {
            tracing::warn!(%error, "board shell config rejected");
            (
                BoardShellConfig::default(),
                ShellConfigSource::Rejected(error.to_string()),
            )
        }
    }
}
