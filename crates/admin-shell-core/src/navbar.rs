/// Extracts the navigation path carried in a URL fragment.
///
/// The server's partial navigation encodes the active view as `#/some/path`;
/// anything else (empty hash, plain anchors) carries no navigation state.
pub fn fragment_path(hash: &str) -> Option<&str> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.starts_with('/') {
        Some(fragment)
    } else {
        None
    }
}

/// Indices of accordion links whose pathname matches the active fragment
/// path, in document order.
pub fn accordion_matches<S: AsRef<str>>(fragment: &str, link_paths: &[S]) -> Vec<usize> {
    link_paths
        .iter()
        .enumerate()
        .filter(|(_, path)| path.as_ref() == fragment)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_path_strips_the_hash_prefix() {
        assert_eq!(fragment_path("#/documents/list/"), Some("/documents/list/"));
    }

    #[test]
    fn plain_anchors_carry_no_navigation_state() {
        assert_eq!(fragment_path("#section-2"), None);
        assert_eq!(fragment_path("#"), None);
        assert_eq!(fragment_path(""), None);
    }

    #[test]
    fn matches_every_link_with_the_active_pathname() {
        let links = [
            "/documents/list/",
            "/tags/list/",
            "/documents/list/",
            "/cabinets/list/",
        ];
        assert_eq!(accordion_matches("/documents/list/", &links), vec![0, 2]);
        assert_eq!(accordion_matches("/settings/", &links), Vec::<usize>::new());
    }
}
