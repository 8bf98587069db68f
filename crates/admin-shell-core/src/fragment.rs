use std::collections::BTreeMap;

use serde::Deserialize;

/// Wire payload of one fragment refresh response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FragmentPayload {
    pub name: String,
    pub hex_hash: String,
    pub html: String,
}

/// Last-seen content fingerprint per fragment name.
///
/// The key set is fixed by configuration, so the map never grows beyond the
/// configured menus.
#[derive(Debug, Clone, Default)]
pub struct FragmentCache {
    hashes: BTreeMap<String, String>,
}

/// What the shell should do after one poll cycle: optionally replace the
/// target's content, and always come back after `next_poll_in_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDirective<'a> {
    pub replace_html: Option<&'a str>,
    pub run_callback: bool,
    pub next_poll_in_ms: u64,
}

impl FragmentCache {
    /// Folds one completed poll cycle into the cache.
    ///
    /// `outcome` is `None` when the request failed or did not decode; the
    /// next poll is scheduled either way, with the configured interval and
    /// no backoff.
    pub fn apply_cycle<'a>(
        &mut self,
        interval_ms: u64,
        outcome: Option<&'a FragmentPayload>,
    ) -> FragmentDirective<'a> {
        let Some(payload) = outcome else {
            return FragmentDirective {
                replace_html: None,
                run_callback: false,
                next_poll_in_ms: interval_ms,
            };
        };

        let changed = self
            .hashes
            .get(&payload.name)
            .is_none_or(|seen| seen != &payload.hex_hash);
        if changed {
            self.hashes
                .insert(payload.name.clone(), payload.hex_hash.clone());
        }

        FragmentDirective {
            replace_html: changed.then_some(payload.html.as_str()),
            run_callback: changed,
            next_poll_in_ms: interval_ms,
        }
    }

    pub fn seen_hash(&self, name: &str) -> Option<&str> {
        self.hashes.get(name).map(String::as_str)
    }
}
