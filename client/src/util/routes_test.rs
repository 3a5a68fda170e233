use super::*;

#[test]
fn paths_match_router_table() {
    let paths: Vec<&str> = AppRoute::ALL.iter().map(|r| r.path()).collect();
    assert_eq!(paths, ["/", "/auth", "/home", "/services", "/contact", "/dashboard"]);
}

#[test]
fn login_and_protected_routes() {
    assert_eq!(AppRoute::LOGIN.path(), "/auth");
    assert_eq!(AppRoute::PROTECTED.path(), "/dashboard");
    assert_eq!(AppRoute::FALLBACK.path(), "/home");
}

#[test]
fn from_path_finds_every_route() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_trailing_slash() {
    assert_eq!(AppRoute::from_path("/services/"), Some(AppRoute::Services));
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Welcome));
}

#[test]
fn from_path_rejects_unknown_and_nested() {
    assert_eq!(AppRoute::from_path("/missing"), None);
    assert_eq!(AppRoute::from_path("/home/extra"), None);
    assert_eq!(AppRoute::from_path(""), None);
}

#[test]
fn resolve_falls_back_to_home() {
    assert_eq!(AppRoute::resolve("/nope"), AppRoute::Home);
    assert_eq!(AppRoute::resolve("/contact"), AppRoute::Contact);
}

#[test]
fn segment_is_path_without_leading_slash() {
    for route in AppRoute::ALL {
        assert_eq!(format!("/{}", route.segment()), route.path());
    }
}

#[test]
fn resolve_strips_trailing_slash_of_known_routes() {
    assert_eq!(AppRoute::resolve("/dashboard/").path(), "/dashboard");
    assert_eq!(AppRoute::resolve("/services/extra").path(), "/home");
}
