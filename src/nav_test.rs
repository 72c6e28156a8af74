use super::*;

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_state_reads_aria_expanded() {
    assert_eq!(MenuState::from_aria(Some("true")), MenuState::Open);
    assert_eq!(MenuState::from_aria(Some("false")), MenuState::Closed);
    assert_eq!(MenuState::from_aria(Some("TRUE")), MenuState::Closed);
    assert_eq!(MenuState::from_aria(None), MenuState::Closed);
}

#[test]
fn menu_state_toggles() {
    assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    assert_eq!(MenuState::default(), MenuState::Closed);
}

#[test]
fn menu_state_attributes() {
    assert_eq!(MenuState::Open.aria_expanded(), "true");
    assert_eq!(MenuState::Open.display(), "flex");
    assert_eq!(MenuState::Closed.aria_expanded(), "false");
    assert_eq!(MenuState::Closed.display(), "");
}

#[test]
fn is_mobile_includes_breakpoint() {
    assert!(is_mobile(375.0, 900));
    assert!(is_mobile(900.0, 900));
    assert!(!is_mobile(900.5, 900));
    assert!(!is_mobile(1280.0, 900));
}

// =============================================================
// Page normalization
// =============================================================

#[test]
fn normalize_page_folds_home_aliases() {
    for path in ["/", "", "/index.html", "/site/Home.html", "/home", "/HOME.HTML"] {
        assert_eq!(normalize_page(path), "home.html", "path {path:?}");
    }
}

#[test]
fn normalize_page_takes_last_segment_lowercased() {
    assert_eq!(normalize_page("/portfolio/About.html"), "about.html");
    assert_eq!(normalize_page("projects.html"), "projects.html");
}

#[test]
fn normalize_page_trailing_slash_is_home() {
    assert_eq!(normalize_page("/portfolio/"), "home.html");
}

#[test]
fn normalize_href_folds_home_aliases_but_not_bare_home() {
    assert_eq!(normalize_href("Index.html"), "home.html");
    assert_eq!(normalize_href("Home.html"), "home.html");
    assert_eq!(normalize_href("home"), "home");
    assert_eq!(normalize_href("Skills.html"), "skills.html");
}

// =============================================================
// link_state
// =============================================================

#[test]
fn link_state_matches_current_page() {
    assert_eq!(link_state(Some("about.html"), "about.html"), Some(true));
    assert_eq!(link_state(Some("Contact.html"), "contact.html"), Some(true));
    assert_eq!(link_state(Some("about.html"), "contact.html"), Some(false));
}

#[test]
fn link_state_home_variants_match_root() {
    let current = normalize_page("/");
    assert_eq!(link_state(Some("Home.html"), &current), Some(true));
    assert_eq!(link_state(Some("index.html"), &current), Some(true));
}

#[test]
fn link_state_skips_missing_or_empty_href() {
    assert_eq!(link_state(None, "home.html"), None);
    assert_eq!(link_state(Some(""), "home.html"), None);
}
