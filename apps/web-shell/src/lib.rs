#![allow(clippy::needless_pass_by_value)]

#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};

    use admin_shell_core::{
        AttributeDirective, AttributePollerSpec, CallbackRegistry, FragmentCache, FragmentPayload,
        MenuSpec, RegistryError, SelectionState, SelectionUpdate, ServerMessage, ShellConfig,
        SpinnerState, ToastSeverity, attribute_directive, display_timeout_ms,
    };
    use admin_shell_core::navbar::{accordion_matches, fragment_path};
    use admin_shell_core::toast::decode_messages;
    use gloo_net::http::Request;
    use gloo_timers::future::sleep;
    use serde::Serialize;
    use serde_json::Value;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement};
    use web_time::{Duration, Instant};

    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod network;
    mod routing;

    use dom::*;
    use lifecycle::*;
    use network::*;
    use routing::*;

    /// Callbacks receive the element the poller is bound to and the decoded
    /// response body (`Value::Null` for fragment refresh callbacks).
    type ShellCallback = fn(&Element, &Value);

    thread_local! {
        static SHELL_CONFIG: RefCell<ShellConfig> = RefCell::new(ShellConfig::default());
        static FRAGMENT_CACHE: RefCell<FragmentCache> = RefCell::new(FragmentCache::default());
        static SELECTION_STATE: RefCell<SelectionState> = RefCell::new(SelectionState::default());
        static SPINNER_STATE: RefCell<SpinnerState> = RefCell::new(SpinnerState::default());
        static CALLBACK_REGISTRY: RefCell<CallbackRegistry<ShellCallback>> = RefCell::new(CallbackRegistry::default());
        static DIAGNOSTICS: RefCell<ShellDiagnostics> = RefCell::new(ShellDiagnostics::default());
        static TOASTS_BOOTSTRAPPED: Cell<bool> = const { Cell::new(false) };
        static DOCUMENT_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::MouseEvent)>>> = const { RefCell::new(None) };
        static DOCUMENT_CHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static DOCUMENT_KEYDOWN_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>> = const { RefCell::new(None) };
        static DOCUMENT_KEYUP_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>> = const { RefCell::new(None) };
        static DOCUMENT_DBLCLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::MouseEvent)>>> = const { RefCell::new(None) };
        static FORM_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static WINDOW_RESIZE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static WINDOW_HASHCHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_boot_phase("booting", "initializing admin web shell");
        if let Err(error) = boot() {
            set_boot_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn shell_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
            })
        })
    }

    #[wasm_bindgen]
    pub fn shell_config_json() -> String {
        SHELL_CONFIG.with(|config| {
            serde_json::to_string(&*config.borrow()).unwrap_or_else(|_| "{}".to_string())
        })
    }

    fn boot() -> Result<(), String> {
        let boot_started_at = Instant::now();

        register_builtin_callbacks();
        let config = load_shell_config()?;
        install_document_handlers()?;
        bootstrap_toasts()?;
        update_navbar_state();
        resize_full_height();

        for menu in &config.menus {
            start_menu_poller(menu.clone());
        }
        start_attribute_pollers()?;

        SHELL_CONFIG.with(|slot| {
            *slot.borrow_mut() = config;
        });

        record_boot_latency(boot_started_at);
        set_boot_phase("ready", "document handlers active");
        Ok(())
    }

    fn register_builtin_callbacks() {
        CALLBACK_REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            let _ = registry.register(
                CALLBACK_UPDATE_NAVBAR,
                navbar_update_state_callback as ShellCallback,
            );
            let _ = registry.register(
                CALLBACK_RESIZE_FULL_HEIGHT,
                resize_full_height_callback as ShellCallback,
            );
        });
    }

    fn navbar_update_state_callback(_target: &Element, _payload: &Value) {
        update_navbar_state();
    }

    fn resize_full_height_callback(_target: &Element, _payload: &Value) {
        resize_full_height();
    }

    fn invoke_callback(name: &str, target: &Element, payload: &Value) {
        let resolved: Result<ShellCallback, RegistryError> =
            CALLBACK_REGISTRY.with(|registry| registry.borrow().resolve(name).map(|callback| *callback));
        match resolved {
            Ok(callback) => callback(target, payload),
            Err(error) => note_callback_failure(&error.to_string()),
        }
    }

    fn start_menu_poller(menu: MenuSpec) {
        spawn_local(async move {
            loop {
                let outcome = fetch_fragment(&menu.url).await;
                let next_poll_in_ms = apply_fragment_outcome(&menu, outcome);
                sleep(Duration::from_millis(next_poll_in_ms)).await;
            }
        });
    }

    fn apply_fragment_outcome(
        menu: &MenuSpec,
        outcome: Result<FragmentPayload, FetchError>,
    ) -> u64 {
        let payload = match outcome {
            Ok(payload) => Some(payload),
            Err(error) => {
                note_fragment_failure(&menu.name, &error.to_string());
                None
            }
        };

        let directive = FRAGMENT_CACHE.with(|cache| {
            cache
                .borrow_mut()
                .apply_cycle(menu.interval_ms, payload.as_ref())
        });
        note_fragment_cycle();

        if let Some(html) = directive.replace_html {
            match replace_fragment_content(&menu.element_id, html) {
                Ok(target) => {
                    note_fragment_replaced(&menu.name);
                    // The replace may have swapped out member checkboxes, so
                    // the range anchor no longer points at anything stable.
                    SELECTION_STATE.with(|state| state.borrow_mut().reset());
                    if directive.run_callback {
                        if let Some(callback) = menu.callback.as_deref() {
                            invoke_callback(callback, &target, &Value::Null);
                        }
                    }
                }
                Err(error) => note_fragment_failure(&menu.name, &error),
            }
        }

        directive.next_poll_in_ms
    }

    fn start_attribute_pollers() -> Result<(), String> {
        let document = document()?;
        let nodes = document
            .query_selector_all(&format!("[{POLL_URL_ATTRIBUTE}]"))
            .map_err(|_| "failed to scan for attribute poller elements".to_string())?;

        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let spec = AttributePollerSpec::from_data_attributes(
                element.get_attribute(POLL_URL_ATTRIBUTE).as_deref(),
                element.get_attribute(POLL_INTERVAL_ATTRIBUTE).as_deref(),
                element.get_attribute(POLL_FIELD_ATTRIBUTE).as_deref(),
                element.get_attribute(POLL_CALLBACK_ATTRIBUTE).as_deref(),
            );
            match spec {
                Ok(spec) => start_attribute_poller(spec, element),
                Err(error) => note_poller_config_failure(&error.to_string()),
            }
        }
        Ok(())
    }

    fn start_attribute_poller(spec: AttributePollerSpec, element: Element) {
        spawn_local(async move {
            loop {
                apply_attribute_outcome(&spec, &element, fetch_json(&spec.url).await);
                sleep(Duration::from_millis(spec.interval_ms)).await;
            }
        });
    }

    fn apply_attribute_outcome(
        spec: &AttributePollerSpec,
        element: &Element,
        outcome: Result<Value, FetchError>,
    ) {
        note_attribute_cycle();
        let body = match outcome {
            Ok(body) => body,
            Err(error) => {
                note_attribute_failure(&error.to_string());
                return;
            }
        };

        match attribute_directive(spec, &body) {
            Ok(AttributeDirective::WriteText(text)) => {
                element.set_text_content(Some(&text));
            }
            Ok(AttributeDirective::Invoke(name)) => invoke_callback(&name, element, &body),
            Err(error) => note_attribute_failure(&error.to_string()),
        }
    }
}
