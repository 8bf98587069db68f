use super::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = toastr, js_name = success)]
    fn toastr_success(message: &str, title: &str, options: &js_sys::Object);
    #[wasm_bindgen(js_namespace = toastr, js_name = info)]
    fn toastr_info(message: &str, title: &str, options: &js_sys::Object);
    #[wasm_bindgen(js_namespace = toastr, js_name = warning)]
    fn toastr_warning(message: &str, title: &str, options: &js_sys::Object);
    #[wasm_bindgen(js_namespace = toastr, js_name = error)]
    fn toastr_error(message: &str, title: &str, options: &js_sys::Object);
}

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn event_target_element(event: &web_sys::Event) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

/// Installs every delegated document/window handler once, in a fixed order.
pub(super) fn install_document_handlers() -> Result<(), String> {
    let window = window()?;
    let document = document()?;

    DOCUMENT_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
            move |event: web_sys::MouseEvent| {
                handle_document_click(&event);
            },
        ));
        let _ =
            document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    DOCUMENT_CHANGE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                handle_document_change(&event);
            },
        ));
        let _ =
            document.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    DOCUMENT_KEYDOWN_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
            move |event: web_sys::KeyboardEvent| {
                handle_document_keydown(&event);
            },
        ));
        let _ =
            document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    DOCUMENT_KEYUP_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    collapse_navbar();
                }
            },
        ));
        let _ =
            document.add_event_listener_with_callback("keyup", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    DOCUMENT_DBLCLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
            move |event: web_sys::MouseEvent| {
                handle_document_dblclick(&event);
            },
        ));
        let _ = document
            .add_event_listener_with_callback("dblclick", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    FORM_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                handle_form_submit(&event);
            },
        ));
        // Capture phase so the extra fields land before submission proceeds.
        let _ = document.add_event_listener_with_callback_and_bool(
            "submit",
            callback.as_ref().unchecked_ref(),
            true,
        );
        *slot.borrow_mut() = Some(callback);
    });

    WINDOW_RESIZE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event: web_sys::Event| {
                resize_full_height();
            }));
        let _ =
            window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    WINDOW_HASHCHANGE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event: web_sys::Event| {
                update_navbar_state();
            }));
        let _ = window
            .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    Ok(())
}

fn handle_document_click(event: &web_sys::MouseEvent) {
    let Some(target) = event_target_element(event) else {
        return;
    };

    if let Some(master) = closest(&target, CHECK_ALL_SELECTOR)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    {
        propagate_check_all(master.checked());
        return;
    }

    if let Some(member) = closest(&target, CHECK_ALL_MEMBER_SELECTOR)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    {
        handle_member_click(&member, event.shift_key());
        return;
    }

    if let Some(anchor) = closest(&target, NEW_WINDOW_ANCHOR_SELECTOR)
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    {
        event.prevent_default();
        open_in_new_window(&anchor);
        return;
    }

    if let Some(panel) = closest(&target, PANEL_ITEM_SELECTOR) {
        if closest(&target, PANEL_INTERACTIVE_SELECTOR).is_none() {
            toggle_panel_selection(&panel);
            return;
        }
    }

    if let Some(anchor) = closest(&target, "a") {
        if !anchor.class_list().contains(DROPDOWN_TOGGLE_CLASS) {
            collapse_navbar();
        }
    }
}

fn handle_document_change(event: &web_sys::Event) {
    let Some(target) = event_target_element(event) else {
        return;
    };

    if let Some(member) = target.dyn_ref::<HtmlInputElement>() {
        if member.matches(CHECK_ALL_MEMBER_SELECTOR).unwrap_or(false) {
            sync_panel_highlight(member);
            return;
        }
    }

    if let Some(select) = closest(&target, AUTO_SUBMIT_SELECT_SELECTOR)
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
    {
        if !select.value().is_empty() {
            if let Some(form) = select.form() {
                let _ = form.request_submit();
            }
        }
    }
}

fn handle_document_keydown(event: &web_sys::KeyboardEvent) {
    if event.key() != "Enter" {
        return;
    }
    let Some(target) = event_target_element(event) else {
        return;
    };
    if let Some(form) = closest(&target, HOTKEY_ENTER_FORM_SELECTOR) {
        event.prevent_default();
        click_default_button(&form);
    }
}

fn handle_document_dblclick(event: &web_sys::MouseEvent) {
    let Some(target) = event_target_element(event) else {
        return;
    };
    if let Some(form) = closest(&target, HOTKEY_DOUBLE_CLICK_FORM_SELECTOR) {
        event.prevent_default();
        click_default_button(&form);
    }
}

fn handle_form_submit(event: &web_sys::Event) {
    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return;
    };
    if form.matches(MULTI_OBJECT_FORM_SELECTOR).unwrap_or(false) {
        inject_multi_object_fields(&form);
    }
}

fn click_default_button(form: &Element) {
    if let Some(button) = form
        .query_selector(HOTKEY_DEFAULT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        button.click();
    }
}

fn member_checkboxes() -> Vec<HtmlInputElement> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(CHECK_ALL_MEMBER_SELECTOR) else {
        return Vec::new();
    };
    let mut members = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(member) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        {
            members.push(member);
        }
    }
    members
}

fn propagate_check_all(checked: bool) {
    for member in member_checkboxes() {
        set_member_checked(&member, checked);
    }
}

fn handle_member_click(member: &HtmlInputElement, shift_key: bool) {
    let members = member_checkboxes();
    let Some(index) = members.iter().position(|candidate| candidate == member) else {
        return;
    };

    let update = SELECTION_STATE.with(|state| {
        state
            .borrow_mut()
            .click(index, member.checked(), shift_key)
    });
    if let SelectionUpdate::Range {
        start,
        end,
        checked,
    } = update
    {
        if let Some(range) = members.get(start..=end) {
            for member in range {
                set_member_checked(member, checked);
            }
        }
    }
}

fn toggle_panel_selection(panel: &Element) {
    let Some(member) = panel
        .query_selector(CHECK_ALL_MEMBER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    member.set_checked(!member.checked());
    dispatch_change_event(&member);

    // The panel toggle re-anchors range selection just like a direct click.
    let members = member_checkboxes();
    if let Some(index) = members.iter().position(|candidate| *candidate == member) {
        let _ = SELECTION_STATE.with(|state| {
            state.borrow_mut().click(index, member.checked(), false)
        });
    }
}

fn sync_panel_highlight(member: &HtmlInputElement) {
    if let Some(panel) = closest(member, PANEL_ITEM_SELECTOR) {
        let class_list = panel.class_list();
        if member.checked() {
            let _ = class_list.add_1(PANEL_HIGHLIGHT_CLASS);
        } else {
            let _ = class_list.remove_1(PANEL_HIGHLIGHT_CLASS);
        }
    }
}

fn set_member_checked(member: &HtmlInputElement, checked: bool) {
    member.set_checked(checked);
    dispatch_change_event(member);
}

fn dispatch_change_event(target: &HtmlInputElement) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = web_sys::Event::new_with_event_init_dict("change", &init) {
        let _ = target.dispatch_event(&event);
    }
}

fn inject_multi_object_fields(form: &web_sys::HtmlFormElement) {
    let Ok(document) = document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(MULTI_OBJECT_CHECKBOX_SELECTOR) else {
        return;
    };

    for index in 0..nodes.length() {
        let Some(checkbox) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let name = checkbox.name();
        if name.is_empty() {
            continue;
        }
        upsert_hidden_field(form, &document, &name, &checkbox.value());
    }
}

fn upsert_hidden_field(
    form: &web_sys::HtmlFormElement,
    document: &web_sys::Document,
    name: &str,
    value: &str,
) {
    // A checked value overrides an existing field of the same name.
    if let Ok(Some(existing)) = form.query_selector(&format!("[name=\"{name}\"]")) {
        if let Some(existing) = existing.dyn_ref::<HtmlInputElement>() {
            existing.set_value(value);
            return;
        }
    }

    let Ok(input) = document.create_element("input") else {
        return;
    };
    let _ = input.set_attribute("type", "hidden");
    let _ = input.set_attribute("name", name);
    let _ = input.set_attribute("value", value);
    let _ = form.append_child(&input);
}

fn open_in_new_window(anchor: &HtmlAnchorElement) {
    let Ok(window) = window() else {
        return;
    };
    if let Ok(Some(new_window)) = window.open_with_url_and_target(&anchor.href(), "_blank") {
        let _ = new_window.focus();
    }
}

pub(super) fn resize_full_height() {
    let Ok(window) = window() else {
        return;
    };
    let Ok(document) = document() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let Ok(nodes) = document.query_selector_all(FULL_HEIGHT_SELECTOR) else {
        return;
    };

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let difference = element
            .get_attribute(HEIGHT_DIFFERENCE_ATTRIBUTE)
            .and_then(|raw| raw.parse::<f64>().ok())
            .unwrap_or(0.0);
        let height = (viewport_height - difference).max(0.0);
        let _ = element.style().set_property("height", &format!("{height}px"));
    }
}

/// Replaces the fragment target's content and returns the target element.
pub(super) fn replace_fragment_content(element_id: &str, html: &str) -> Result<Element, String> {
    let document = document()?;
    let target = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("missing fragment target `{element_id}`"))?;
    target.set_inner_html(html);
    Ok(target)
}

pub(super) fn show_spinner() {
    let Some(spinner) = spinner_element() else {
        return;
    };
    if let Some(icon_classes) = spinner.get_attribute(SPINNER_ICON_ATTRIBUTE) {
        for icon_class in icon_classes.split_whitespace() {
            let _ = spinner.class_list().add_1(icon_class);
        }
    }
    if let Ok(spinner) = spinner.dyn_into::<HtmlElement>() {
        let _ = spinner.style().set_property("display", "inline-block");
    }
}

pub(super) fn hide_spinner() {
    let Some(spinner) = spinner_element() else {
        return;
    };
    if let Ok(spinner) = spinner.dyn_into::<HtmlElement>() {
        let _ = spinner.style().set_property("display", "none");
    }
}

fn spinner_element() -> Option<Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(SPINNER_ELEMENT_ID)
}

/// One-time toast setup: copy the page's alert colors onto the toast
/// library's class names, then drain the server-rendered message block.
pub(super) fn bootstrap_toasts() -> Result<(), String> {
    let already_bootstrapped = TOASTS_BOOTSTRAPPED.with(|flag| flag.replace(true));
    if already_bootstrapped {
        return Ok(());
    }

    inject_toast_styles()?;
    dispatch_server_messages();
    Ok(())
}

fn inject_toast_styles() -> Result<(), String> {
    let window = window()?;
    let document = document()?;
    if document.get_element_by_id(TOAST_STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;

    let mut rules = String::new();
    for (toast_class, alert_class) in TOAST_SAMPLE_CLASSES {
        let sample = document
            .create_element("div")
            .map_err(|_| "failed to create alert sample".to_string())?;
        sample.set_class_name(&format!("hidden alert {alert_class}"));
        body.append_child(&sample)
            .map_err(|_| "failed to append alert sample".to_string())?;

        let background = window
            .get_computed_style(&sample)
            .ok()
            .flatten()
            .and_then(|computed| computed.get_property_value("background-color").ok())
            .unwrap_or_default();
        if !background.is_empty() {
            rules.push_str(&format!(".{toast_class} {{ background-color: {background}; }}\n"));
        }
    }

    let style = document
        .create_element("style")
        .map_err(|_| "failed to create toast style element".to_string())?;
    style.set_id(TOAST_STYLE_ELEMENT_ID);
    style.set_text_content(Some(&rules));
    let head = document
        .head()
        .ok_or_else(|| "document head is unavailable".to_string())?;
    head.append_child(&style)
        .map_err(|_| "failed to append toast style element".to_string())?;
    Ok(())
}

fn dispatch_server_messages() {
    let raw = match script_tag_text(MESSAGES_SCRIPT_ID) {
        Ok(Some(raw)) => raw,
        Ok(None) => return,
        Err(error) => {
            note_message_failure(&error);
            return;
        }
    };

    match decode_messages(&raw) {
        Ok(messages) => {
            for message in &messages {
                show_toast(message);
            }
        }
        Err(error) => note_message_failure(&format!("failed to decode server messages: {error}")),
    }
}

pub(super) fn show_toast(message: &ServerMessage) {
    let severity = ToastSeverity::from_tag(&message.tags);
    let options = js_sys::Object::new();
    if let Some(timeout_ms) = display_timeout_ms(severity) {
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str("timeOut"),
            &JsValue::from_f64(timeout_ms as f64),
        );
    }

    match severity {
        ToastSeverity::Success => toastr_success(&message.message, "", &options),
        ToastSeverity::Info => toastr_info(&message.message, "", &options),
        ToastSeverity::Warning => toastr_warning(&message.message, "", &options),
        ToastSeverity::Error => toastr_error(&message.message, "", &options),
    }
    note_toast_shown();
}
