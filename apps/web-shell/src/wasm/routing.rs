use super::*;

/// Re-applies the expanded/active navbar state for the path carried in the
/// URL fragment. Runs at boot, on `hashchange`, and after a main-menu
/// fragment replace (via the `navbar/update-state` callback).
pub(super) fn update_navbar_state() {
    let Ok(window) = window() else {
        return;
    };
    let Ok(document) = document() else {
        return;
    };
    let Ok(hash) = window.location().hash() else {
        return;
    };
    let Some(fragment) = fragment_path(&hash) else {
        return;
    };

    let anchors = accordion_link_anchors(&document);
    let link_paths: Vec<String> = anchors.iter().map(|anchor| anchor.pathname()).collect();
    for index in accordion_matches(fragment, &link_paths) {
        if let Some(anchor) = anchors.get(index) {
            expand_accordion_for(anchor);
        }
    }
}

fn accordion_link_anchors(document: &web_sys::Document) -> Vec<HtmlAnchorElement> {
    let Ok(nodes) = document.query_selector_all(ACCORDION_LINK_SELECTOR) else {
        return Vec::new();
    };
    let mut anchors = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(anchor) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok())
        {
            anchors.push(anchor);
        }
    }
    anchors
}

fn expand_accordion_for(anchor: &HtmlAnchorElement) {
    if let Ok(Some(section)) = anchor.closest(ACCORDION_SECTION_SELECTOR) {
        let _ = section.class_list().add_1(NAVBAR_OPEN_CLASS);
        if let Some(group) = section.parent_element() {
            expand_collapsed_toggles(&group);
        }
    }
    if let Some(item) = anchor.parent_element() {
        let _ = item.class_list().add_1(ACTIVE_CLASS);
    }
}

fn expand_collapsed_toggles(group: &Element) {
    let Ok(toggles) = group.query_selector_all(NAVBAR_COLLAPSED_SELECTOR) else {
        return;
    };
    for index in 0..toggles.length() {
        if let Some(toggle) = toggles
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            let _ = toggle.class_list().remove_1(NAVBAR_COLLAPSED_CLASS);
            let _ = toggle.set_attribute("aria-expanded", "true");
        }
    }
}

/// Folds the expanded navbar away; bound to Escape and to plain anchor
/// clicks.
pub(super) fn collapse_navbar() {
    let Ok(document) = document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(NAVBAR_COLLAPSE_SELECTOR) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            let _ = element.class_list().remove_1(NAVBAR_OPEN_CLASS);
        }
    }
}
