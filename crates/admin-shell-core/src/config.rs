use serde::{Deserialize, Serialize};

/// One menu poller entry from the page's shell config block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSpec {
    pub name: String,
    pub url: String,
    pub element_id: String,
    pub interval_ms: u64,
    #[serde(default)]
    pub callback: Option<String>,
}

/// Shell configuration injected by the server as a JSON script tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub menus: Vec<MenuSpec>,
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollerConfigError {
    #[error("data-poll-url must not be empty")]
    MissingUrl,
    #[error("data-poll-interval is missing or not a positive integer")]
    InvalidInterval,
    #[error("one of data-poll-attribute or data-poll-callback is required")]
    MissingTarget,
}

/// Attribute poller configuration read from one element's data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePollerSpec {
    pub url: String,
    pub interval_ms: u64,
    pub attribute: Option<String>,
    pub callback: Option<String>,
}

impl AttributePollerSpec {
    pub fn from_data_attributes(
        url: Option<&str>,
        interval: Option<&str>,
        attribute: Option<&str>,
        callback: Option<&str>,
    ) -> Result<Self, PollerConfigError> {
        let url = non_empty(url).ok_or(PollerConfigError::MissingUrl)?;
        let interval_ms = non_empty(interval)
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|parsed| *parsed > 0)
            .ok_or(PollerConfigError::InvalidInterval)?;
        let attribute = non_empty(attribute);
        let callback = non_empty(callback);
        if attribute.is_none() && callback.is_none() {
            return Err(PollerConfigError::MissingTarget);
        }

        Ok(Self {
            url: url.to_string(),
            interval_ms,
            attribute: attribute.map(ToString::to_string),
            callback: callback.map(ToString::to_string),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_menu_config_block() {
        let config = ShellConfig::from_json(
            r#"{
                "menus": [
                    {
                        "name": "main",
                        "url": "/menus/main/",
                        "element_id": "main-menu",
                        "interval_ms": 2000,
                        "callback": "navbar/update-state"
                    },
                    {
                        "name": "actions",
                        "url": "/menus/actions/",
                        "element_id": "actions-menu",
                        "interval_ms": 5000
                    }
                ]
            }"#,
        );

        assert_eq!(
            config.ok(),
            Some(ShellConfig {
                menus: vec![
                    MenuSpec {
                        name: "main".to_string(),
                        url: "/menus/main/".to_string(),
                        element_id: "main-menu".to_string(),
                        interval_ms: 2_000,
                        callback: Some("navbar/update-state".to_string()),
                    },
                    MenuSpec {
                        name: "actions".to_string(),
                        url: "/menus/actions/".to_string(),
                        element_id: "actions-menu".to_string(),
                        interval_ms: 5_000,
                        callback: None,
                    },
                ],
            })
        );
    }

    #[test]
    fn empty_config_block_yields_no_menus() {
        assert_eq!(ShellConfig::from_json("{}").ok(), Some(ShellConfig::default()));
    }

    #[test]
    fn poller_spec_requires_url() {
        let spec = AttributePollerSpec::from_data_attributes(None, Some("1000"), Some("count"), None);
        assert_eq!(spec, Err(PollerConfigError::MissingUrl));

        let spec = AttributePollerSpec::from_data_attributes(Some("  "), Some("1000"), Some("count"), None);
        assert_eq!(spec, Err(PollerConfigError::MissingUrl));
    }

    #[test]
    fn poller_spec_requires_positive_integer_interval() {
        for interval in [None, Some(""), Some("soon"), Some("0"), Some("-5")] {
            let spec = AttributePollerSpec::from_data_attributes(
                Some("/status/"),
                interval,
                Some("count"),
                None,
            );
            assert_eq!(spec, Err(PollerConfigError::InvalidInterval));
        }
    }

    #[test]
    fn poller_spec_requires_attribute_or_callback() {
        let spec = AttributePollerSpec::from_data_attributes(Some("/status/"), Some("1000"), None, None);
        assert_eq!(spec, Err(PollerConfigError::MissingTarget));
    }

    #[test]
    fn poller_spec_accepts_callback_only() {
        let spec = AttributePollerSpec::from_data_attributes(
            Some("/status/"),
            Some("1500"),
            None,
            Some("badge/flash"),
        );
        assert_eq!(
            spec,
            Ok(AttributePollerSpec {
                url: "/status/".to_string(),
                interval_ms: 1_500,
                attribute: None,
                callback: Some("badge/flash".to_string()),
            })
        );
    }
}
