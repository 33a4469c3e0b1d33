/// Optional `window` property holding a partial `BoardShellConfig` object.
pub(crate) const CONFIG_GLOBAL: &str = "__BOARD_SHELL_CONFIG__";
pub(crate) const CONSOLE_PREFIX: &str = "[board-web-shell]";
