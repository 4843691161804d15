use super::*;

#[test]
fn root_link_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/components", "/"));
}

#[test]
fn section_link_matches_nested_paths() {
    assert!(is_active("/components", "/components"));
    assert!(is_active("/components/button", "/components"));
}

#[test]
fn section_link_ignores_shared_prefix() {
    assert!(!is_active("/componentsx", "/components"));
    assert!(!is_active("/changelog", "/components"));
}
