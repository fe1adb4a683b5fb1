use bytes::Bytes;

use wicket::http::request::Method;
use wicket::http::routes::{MethodFilter, Route, RouteHandler, RouteTable};

fn placeholder() -> RouteHandler {
    RouteHandler::Fixed {
        content_type: "text/plain",
        body: Bytes::from_static(b"x"),
    }
}

#[test]
fn test_exact_pattern_matches_exact_path() {
    let table = RouteTable::new(vec![Route::new("/status", MethodFilter::Any, placeholder())]);

    assert!(table.find("/status", Method::GET).is_some());
    assert!(table.find("/status/extra", Method::GET).is_none());
    assert!(table.find("/statu", Method::GET).is_none());
}

#[test]
fn test_wildcard_pattern_matches_prefix() {
    let table = RouteTable::new(vec![Route::new("/upload/*", MethodFilter::Any, placeholder())]);

    assert!(table.find("/upload/notes.txt", Method::PUT).is_some());
    assert!(table.find("/upload/", Method::PUT).is_some());
    assert!(table.find("/upload", Method::PUT).is_none());
    assert!(table.find("/other", Method::PUT).is_none());
}

#[test]
fn test_bare_wildcard_matches_everything() {
    let table = RouteTable::new(vec![Route::new("*", MethodFilter::Any, placeholder())]);

    assert!(table.find("/anything", Method::GET).is_some());
    assert!(table.find("", Method::UNKNOWN).is_some());
}

#[test]
fn test_method_filter_restricts_match() {
    let table = RouteTable::new(vec![Route::new(
        "/api",
        MethodFilter::Is(Method::POST),
        placeholder(),
    )]);

    assert!(table.find("/api", Method::POST).is_some());
    assert!(table.find("/api", Method::GET).is_none());
    assert!(table.find("/api", Method::UNKNOWN).is_none());
}

#[test]
fn test_any_method_filter_accepts_unknown() {
    let table = RouteTable::new(vec![Route::new("/x", MethodFilter::Any, placeholder())]);

    assert!(table.find("/x", Method::UNKNOWN).is_some());
}

#[test]
fn test_first_match_wins_in_registration_order() {
    // A wildcard registered ahead of a more specific entry shadows it for
    // the methods it accepts; there is no most-specific-prefix rule.
    let table = RouteTable::new(vec![
        Route::new("/api/*", MethodFilter::Is(Method::POST), placeholder()),
        Route::new("/api/users", MethodFilter::Is(Method::GET), placeholder()),
    ]);

    let hit = table.find("/api/users", Method::POST).unwrap();
    assert_eq!(hit.pattern(), "/api/*");

    // The POST-only wildcard does not take GET requests; the later exact
    // entry does.
    let hit = table.find("/api/users", Method::GET).unwrap();
    assert_eq!(hit.pattern(), "/api/users");
}

#[test]
fn test_wildcard_accepting_any_method_shadows_later_entries() {
    let table = RouteTable::new(vec![
        Route::new("/api/*", MethodFilter::Any, placeholder()),
        Route::new("/api/users", MethodFilter::Is(Method::GET), placeholder()),
    ]);

    let hit = table.find("/api/users", Method::GET).unwrap();
    assert_eq!(hit.pattern(), "/api/*");
}

#[test]
fn test_no_match_is_none() {
    let table = RouteTable::new(vec![
        Route::new("/a", MethodFilter::Any, placeholder()),
        Route::new("/b/*", MethodFilter::Any, placeholder()),
    ]);

    assert!(table.find("/c", Method::GET).is_none());
}

#[test]
fn test_empty_table_matches_nothing() {
    let table = RouteTable::new(Vec::new());

    assert!(table.find("/", Method::GET).is_none());
}
