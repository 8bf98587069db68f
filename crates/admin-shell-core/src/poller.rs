use serde_json::Value;

use crate::config::AttributePollerSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    #[error("response field `{0}` is missing or not a scalar value")]
    MissingAttribute(String),
}

/// DOM effect of one successful attribute poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDirective {
    /// Write this text into the target element.
    WriteText(String),
    /// Resolve this name against the callback registry and invoke it with
    /// the decoded response.
    Invoke(String),
}

/// Decides what to do with a decoded attribute poll response.
///
/// A configured callback takes precedence over the attribute field. Element
/// text is only produced for scalar fields; a missing or structured field is
/// a defined error, never a stringified placeholder.
pub fn attribute_directive(
    spec: &AttributePollerSpec,
    body: &Value,
) -> Result<AttributeDirective, PollError> {
    if let Some(callback) = spec.callback.as_deref() {
        return Ok(AttributeDirective::Invoke(callback.to_string()));
    }

    let attribute = spec.attribute.as_deref().unwrap_or_default();
    scalar_text(body.get(attribute))
        .map(AttributeDirective::WriteText)
        .ok_or_else(|| PollError::MissingAttribute(attribute.to_string()))
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(attribute: Option<&str>, callback: Option<&str>) -> AttributePollerSpec {
        AttributePollerSpec {
            url: "/status/".to_string(),
            interval_ms: 1_000,
            attribute: attribute.map(ToString::to_string),
            callback: callback.map(ToString::to_string),
        }
    }

    #[test]
    fn numeric_attribute_becomes_element_text() {
        let directive = attribute_directive(
            &spec(Some("pending_tasks"), None),
            &json!({"pending_tasks": 42}),
        );
        assert_eq!(
            directive,
            Ok(AttributeDirective::WriteText("42".to_string()))
        );
    }

    #[test]
    fn string_and_bool_attributes_render_as_text() {
        let directive = attribute_directive(&spec(Some("label"), None), &json!({"label": "busy"}));
        assert_eq!(
            directive,
            Ok(AttributeDirective::WriteText("busy".to_string()))
        );

        let directive = attribute_directive(&spec(Some("active"), None), &json!({"active": true}));
        assert_eq!(
            directive,
            Ok(AttributeDirective::WriteText("true".to_string()))
        );
    }

    #[test]
    fn missing_attribute_is_a_defined_error() {
        let directive =
            attribute_directive(&spec(Some("pending_tasks"), None), &json!({"other": 1}));
        assert_eq!(
            directive,
            Err(PollError::MissingAttribute("pending_tasks".to_string()))
        );
    }

    #[test]
    fn structured_attribute_is_a_defined_error() {
        let directive = attribute_directive(
            &spec(Some("pending_tasks"), None),
            &json!({"pending_tasks": {"count": 1}}),
        );
        assert_eq!(
            directive,
            Err(PollError::MissingAttribute("pending_tasks".to_string()))
        );
    }

    #[test]
    fn callback_takes_precedence_over_attribute() {
        let directive = attribute_directive(
            &spec(Some("pending_tasks"), Some("badge/flash")),
            &json!({"pending_tasks": 42}),
        );
        assert_eq!(
            directive,
            Ok(AttributeDirective::Invoke("badge/flash".to_string()))
        );
    }
}
