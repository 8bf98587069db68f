use std::collections::BTreeMap;

/// Tracks the most recently toggled member checkbox for range extension.
///
/// The pointer indexes into the member checkbox set in DOM order; the shell
/// resets it whenever a fragment replace invalidates that set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    last_toggled: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// Only the clicked checkbox changed; the browser already applied it.
    Single { index: usize, checked: bool },
    /// Set every member in `start..=end` to `checked` and fire a change
    /// notification for each.
    Range {
        start: usize,
        end: usize,
        checked: bool,
    },
}

impl SelectionState {
    /// Folds one member checkbox click into the state.
    ///
    /// `checked` is the clicked checkbox's state after the browser's own
    /// toggle; on a shift-click the whole range takes that state. A
    /// shift-click with no prior toggle degrades to a plain toggle.
    pub fn click(&mut self, index: usize, checked: bool, shift_key: bool) -> SelectionUpdate {
        let update = match self.last_toggled {
            Some(anchor) if shift_key => SelectionUpdate::Range {
                start: anchor.min(index),
                end: anchor.max(index),
                checked,
            },
            _ => SelectionUpdate::Single { index, checked },
        };
        self.last_toggled = Some(index);
        update
    }

    pub fn reset(&mut self) {
        self.last_toggled = None;
    }
}

/// Merges checked bulk-action checkbox values into serialized form fields,
/// checked values overriding same-named fields.
pub fn merge_multi_object_fields(
    fields: impl IntoIterator<Item = (String, String)>,
    checked: impl IntoIterator<Item = (String, String)>,
) -> BTreeMap<String, String> {
    let mut merged: BTreeMap<String, String> = fields.into_iter().collect();
    merged.extend(checked);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_click_toggles_only_the_target() {
        let mut state = SelectionState::default();
        let update = state.click(2, true, false);
        assert_eq!(
            update,
            SelectionUpdate::Single {
                index: 2,
                checked: true
            }
        );
    }

    #[test]
    fn shift_click_extends_from_last_toggled() {
        let mut state = SelectionState::default();
        let _ = state.click(0, true, false);
        let update = state.click(3, true, true);

        assert_eq!(
            update,
            SelectionUpdate::Range {
                start: 0,
                end: 3,
                checked: true
            }
        );
    }

    #[test]
    fn shift_click_range_works_upwards() {
        let mut state = SelectionState::default();
        let _ = state.click(3, false, false);
        let update = state.click(1, false, true);

        assert_eq!(
            update,
            SelectionUpdate::Range {
                start: 1,
                end: 3,
                checked: false
            }
        );
    }

    #[test]
    fn range_takes_the_clicked_checkbox_state() {
        let mut state = SelectionState::default();
        let _ = state.click(0, true, false);
        // The shift-clicked box landed unchecked, so the range unchecks.
        let update = state.click(2, false, true);

        assert_eq!(
            update,
            SelectionUpdate::Range {
                start: 0,
                end: 2,
                checked: false
            }
        );
    }

    #[test]
    fn shift_click_without_prior_toggle_is_a_plain_toggle() {
        let mut state = SelectionState::default();
        let update = state.click(3, true, true);
        assert_eq!(
            update,
            SelectionUpdate::Single {
                index: 3,
                checked: true
            }
        );
    }

    #[test]
    fn consecutive_shift_clicks_re_anchor() {
        let mut state = SelectionState::default();
        let _ = state.click(0, true, false);
        let _ = state.click(3, true, true);
        let update = state.click(5, true, true);

        assert_eq!(
            update,
            SelectionUpdate::Range {
                start: 3,
                end: 5,
                checked: true
            }
        );
    }

    #[test]
    fn reset_clears_the_anchor() {
        let mut state = SelectionState::default();
        let _ = state.click(1, true, false);
        state.reset();

        let update = state.click(4, true, true);
        assert_eq!(
            update,
            SelectionUpdate::Single {
                index: 4,
                checked: true
            }
        );
    }

    #[test]
    fn checked_values_override_form_fields() {
        let merged = merge_multi_object_fields(
            [
                ("csrf_token".to_string(), "abc".to_string()),
                ("id_list".to_string(), "".to_string()),
            ],
            [
                ("id_list".to_string(), "7".to_string()),
                ("id_9".to_string(), "9".to_string()),
            ],
        );

        assert_eq!(merged.get("csrf_token").map(String::as_str), Some("abc"));
        assert_eq!(merged.get("id_list").map(String::as_str), Some("7"));
        assert_eq!(merged.get("id_9").map(String::as_str), Some("9"));
    }
}
