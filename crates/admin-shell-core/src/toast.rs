use serde::Deserialize;

/// Warning toasts stay up this long; errors persist until dismissed.
pub const WARNING_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastSeverity {
    /// Maps a server message tag onto a severity; unknown tags dispatch as
    /// `Info`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// Display duration override per severity; `None` keeps the toast library's
/// default.
pub fn display_timeout_ms(severity: ToastSeverity) -> Option<u64> {
    match severity {
        ToastSeverity::Error => Some(0),
        ToastSeverity::Warning => Some(WARNING_TIMEOUT_MS),
        ToastSeverity::Success | ToastSeverity::Info => None,
    }
}

/// One server-rendered message record from the page's message block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    pub tags: String,
    pub message: String,
}

pub fn decode_messages(raw: &str) -> Result<Vec<ServerMessage>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toasts_persist_indefinitely() {
        assert_eq!(display_timeout_ms(ToastSeverity::Error), Some(0));
    }

    #[test]
    fn warning_toasts_show_for_ten_seconds() {
        assert_eq!(display_timeout_ms(ToastSeverity::Warning), Some(10_000));
    }

    #[test]
    fn other_severities_use_the_library_default() {
        assert_eq!(display_timeout_ms(ToastSeverity::Success), None);
        assert_eq!(display_timeout_ms(ToastSeverity::Info), None);
    }

    #[test]
    fn tags_map_onto_severities() {
        assert_eq!(ToastSeverity::from_tag("success"), ToastSeverity::Success);
        assert_eq!(ToastSeverity::from_tag("warning"), ToastSeverity::Warning);
        assert_eq!(ToastSeverity::from_tag("error"), ToastSeverity::Error);
        assert_eq!(ToastSeverity::from_tag("danger"), ToastSeverity::Error);
        assert_eq!(ToastSeverity::from_tag("info"), ToastSeverity::Info);
    }

    #[test]
    fn unknown_tags_fall_back_to_info() {
        assert_eq!(ToastSeverity::from_tag("debug"), ToastSeverity::Info);
        assert_eq!(ToastSeverity::from_tag(""), ToastSeverity::Info);
    }

    #[test]
    fn decodes_server_message_records() {
        let messages = decode_messages(
            r#"[
                {"tags": "success", "message": "Document uploaded."},
                {"tags": "error", "message": "Conversion failed."}
            ]"#,
        );

        assert_eq!(
            messages.ok(),
            Some(vec![
                ServerMessage {
                    tags: "success".to_string(),
                    message: "Document uploaded.".to_string(),
                },
                ServerMessage {
                    tags: "error".to_string(),
                    message: "Conversion failed.".to_string(),
                },
            ])
        );
    }

    #[test]
    fn malformed_message_block_is_an_error() {
        assert!(decode_messages("not json").is_err());
    }
}
