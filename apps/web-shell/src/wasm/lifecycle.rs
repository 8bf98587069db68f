use super::*;

#[derive(Debug, Clone, Default, Serialize)]
pub(super) struct ShellDiagnostics {
    pub(super) phase: String,
    pub(super) detail: String,
    pub(super) last_error: Option<String>,
    pub(super) boot_latency_ms: Option<u64>,
    pub(super) fragment_cycles: u64,
    pub(super) fragment_failures: u64,
    pub(super) fragments_replaced: u64,
    pub(super) last_replaced_fragment: Option<String>,
    pub(super) attribute_cycles: u64,
    pub(super) attribute_failures: u64,
    pub(super) poller_config_failures: u64,
    pub(super) callback_failures: u64,
    pub(super) last_callback_error: Option<String>,
    pub(super) toasts_shown: u64,
}

pub(super) fn set_boot_phase(phase: &str, detail: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = phase.to_string();
        state.detail = detail.to_string();
        if phase != "error" {
            state.last_error = None;
        }
    });
}

pub(super) fn set_boot_error(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = "error".to_string();
        state.detail = "startup failed".to_string();
        state.last_error = Some(message.to_string());
    });
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub(super) fn record_boot_latency(boot_started_at: Instant) {
    let boot_latency_ms =
        u64::try_from(boot_started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().boot_latency_ms = Some(boot_latency_ms);
    });
}

pub(super) fn note_fragment_cycle() {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.fragment_cycles = state.fragment_cycles.saturating_add(1);
    });
}

pub(super) fn note_fragment_replaced(name: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.fragments_replaced = state.fragments_replaced.saturating_add(1);
        state.last_replaced_fragment = Some(name.to_string());
    });
}

pub(super) fn note_fragment_failure(name: &str, message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.fragment_failures = state.fragment_failures.saturating_add(1);
        state.last_error = Some(format!("fragment `{name}`: {message}"));
    });
}

pub(super) fn note_attribute_cycle() {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.attribute_cycles = state.attribute_cycles.saturating_add(1);
    });
}

pub(super) fn note_attribute_failure(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.attribute_failures = state.attribute_failures.saturating_add(1);
        state.last_error = Some(format!("attribute poller: {message}"));
    });
}

pub(super) fn note_poller_config_failure(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.poller_config_failures = state.poller_config_failures.saturating_add(1);
        state.last_error = Some(format!("poller config: {message}"));
    });
}

pub(super) fn note_callback_failure(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.callback_failures = state.callback_failures.saturating_add(1);
        state.last_callback_error = Some(message.to_string());
    });
}

pub(super) fn note_message_failure(message: &str) {
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().last_error = Some(message.to_string());
    });
}

pub(super) fn note_toast_shown() {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.toasts_shown = state.toasts_shown.saturating_add(1);
    });
}

/// Text content of a server-injected JSON script tag, `None` when the page
/// does not carry the block.
pub(super) fn script_tag_text(id: &str) -> Result<Option<String>, String> {
    let document = document()?;
    Ok(document
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty()))
}

pub(super) fn load_shell_config() -> Result<ShellConfig, String> {
    match script_tag_text(CONFIG_SCRIPT_ID)? {
        None => Ok(ShellConfig::default()),
        Some(raw) => ShellConfig::from_json(&raw)
            .map_err(|error| format!("failed to decode shell config: {error}")),
    }
}
