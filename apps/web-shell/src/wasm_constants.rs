/// Server-injected JSON blocks.
pub(crate) const CONFIG_SCRIPT_ID: &str = "admin-web-shell-config";
pub(crate) const MESSAGES_SCRIPT_ID: &str = "admin-web-shell-messages";

/// Shared loading indicator.
pub(crate) const SPINNER_ELEMENT_ID: &str = "admin-web-shell-spinner";
pub(crate) const SPINNER_ICON_ATTRIBUTE: &str = "data-spinner-icon";
pub(crate) const SPINNER_SHOW_DELAY_MS: u64 = 450;

/// Attribute poller configuration surface.
pub(crate) const POLL_URL_ATTRIBUTE: &str = "data-poll-url";
pub(crate) const POLL_INTERVAL_ATTRIBUTE: &str = "data-poll-interval";
pub(crate) const POLL_FIELD_ATTRIBUTE: &str = "data-poll-attribute";
pub(crate) const POLL_CALLBACK_ATTRIBUTE: &str = "data-poll-callback";

/// Group selection hooks in the server-rendered markup.
pub(crate) const CHECK_ALL_SELECTOR: &str = "input.check-all";
pub(crate) const CHECK_ALL_MEMBER_SELECTOR: &str = "input.check-all-member";
pub(crate) const PANEL_ITEM_SELECTOR: &str = ".panel-item";
pub(crate) const PANEL_HIGHLIGHT_CLASS: &str = "panel-item-active";
pub(crate) const PANEL_INTERACTIVE_SELECTOR: &str = "a, button, input, label, select";

/// Bulk-action form hooks.
pub(crate) const MULTI_OBJECT_FORM_SELECTOR: &str = "form.form-multi-object-action";
pub(crate) const MULTI_OBJECT_CHECKBOX_SELECTOR: &str =
    "input.form-multi-object-action-checkbox:checked";

/// Shell conveniences.
pub(crate) const AUTO_SUBMIT_SELECT_SELECTOR: &str = "select.select-auto-submit";
pub(crate) const HOTKEY_ENTER_FORM_SELECTOR: &str = ".form-hotkey-enter";
pub(crate) const HOTKEY_DOUBLE_CLICK_FORM_SELECTOR: &str = ".form-hotkey-double-click";
pub(crate) const HOTKEY_DEFAULT_BUTTON_SELECTOR: &str = ".btn-hotkey-default";
pub(crate) const FULL_HEIGHT_SELECTOR: &str = ".full-height";
pub(crate) const HEIGHT_DIFFERENCE_ATTRIBUTE: &str = "data-height-difference";
pub(crate) const NEW_WINDOW_ANCHOR_SELECTOR: &str = "a.new-window";

/// Navbar synchronization.
pub(crate) const NAVBAR_COLLAPSE_SELECTOR: &str = ".navbar-collapse";
pub(crate) const NAVBAR_OPEN_CLASS: &str = "in";
pub(crate) const NAVBAR_COLLAPSED_CLASS: &str = "collapsed";
pub(crate) const NAVBAR_COLLAPSED_SELECTOR: &str = ".collapsed";
pub(crate) const DROPDOWN_TOGGLE_CLASS: &str = "dropdown-toggle";
pub(crate) const ACCORDION_LINK_SELECTOR: &str = "a.main-menu-accordion-link";
pub(crate) const ACCORDION_SECTION_SELECTOR: &str = ".collapse";
pub(crate) const ACTIVE_CLASS: &str = "active";

/// Registry keys for the shell's built-in callbacks.
pub(crate) const CALLBACK_UPDATE_NAVBAR: &str = "navbar/update-state";
pub(crate) const CALLBACK_RESIZE_FULL_HEIGHT: &str = "layout/resize-full-height";

/// Toast bootstrap.
pub(crate) const TOAST_STYLE_ELEMENT_ID: &str = "admin-web-shell-toast-styles";
pub(crate) const TOAST_SAMPLE_CLASSES: [(&str, &str); 4] = [
    ("toast-success", "alert-success"),
    ("toast-info", "alert-info"),
    ("toast-error", "alert-danger"),
    ("toast-warning", "alert-warning"),
];
