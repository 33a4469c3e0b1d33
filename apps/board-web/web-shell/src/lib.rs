mod shell_config;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

pub use shell_config::{ShellConfigSource, resolve_shell_config};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use board_client_core::{BoardPage, EventDisposition, ListenerId};
    use wasm_bindgen::prelude::*;

    use crate::shell_config::resolve_shell_config;
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;

    use dom::WebPlatform;
    use lifecycle::*;

    struct ShellRuntime {
        page: BoardPage,
        platform: WebPlatform,
    }

    thread_local! {
        static SHELL: RefCell<Option<ShellRuntime>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(error) = boot() {
            console_warn(&format!("board shell boot failed: {error}"));
        }
    }

    fn boot() -> Result<(), String> {
        let mut platform = WebPlatform::from_window()?;
        let (config, source) = resolve_shell_config(read_config_global().as_deref());
        if let Some(warning) = source.warning() {
            console_warn(&format!("{CONFIG_GLOBAL}: {warning}; using defaults"));
        }

        let mut page = BoardPage::load(&mut platform, config);
        report_failures(&mut page);

        SHELL.with(|slot| {
            let mut slot = slot
                .try_borrow_mut()
                .map_err(|_| "shell runtime is busy".to_string())?;
            if let Some(mut previous) = slot.take() {
                previous.page.detach(&mut previous.platform);
            }
            *slot = Some(ShellRuntime { page, platform });
            Ok(())
        })
    }

    /// Entry point for every DOM listener the platform attached.
    pub(super) fn handle_listener_event(listener: ListenerId, event: web_sys::Event) {
        let disposition = SHELL.with(|slot| {
            let Ok(mut slot) = slot.try_borrow_mut() else {
                console_warn("board shell: re-entrant event dropped");
                return EventDisposition::Continue;
            };
            let Some(ShellRuntime { page, platform }) = slot.as_mut() else {
                return EventDisposition::Continue;
            };
            let disposition = page.dispatch(platform, listener, event_context(&event));
            report_failures(page);
            disposition
        });
        if disposition == EventDisposition::PreventDefault {
            event.prevent_default();
        }
    }

    fn report_failures(page: &mut BoardPage) {
        for failure in page.take_unreported_failures() {
            console_warn(&format!("board shell: {failure}"));
        }
    }

    #[wasm_bindgen]
    pub fn page_diagnostics_json() -> String {
        SHELL.with(|slot| {
            let Ok(slot) = slot.try_borrow() else {
                return "{\"error\":\"shell runtime is busy\"}".to_string();
            };
            match slot.as_ref() {
                Some(runtime) => serde_json::to_string(&runtime.page.diagnostics())
                    .unwrap_or_else(|_| {
                        "{\"error\":\"diagnostics serialization failed\"}".to_string()
                    }),
                None => "{\"error\":\"shell not booted\"}".to_string(),
            }
        })
    }

    /// Tears down every listener, for hosts that swap the board out of a
    /// larger single-page app.
    #[wasm_bindgen]
    pub fn detach_page_listeners() -> u32 {
        SHELL.with(|slot| {
            let Ok(mut slot) = slot.try_borrow_mut() else {
                return 0;
            };
            let Some(mut runtime) = slot.take() else {
                return 0;
            };
            runtime.page.detach(&mut runtime.platform) as u32
        })
    }
}
