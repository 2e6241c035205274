//! End-to-end use of the facade: configuration, matching, merging

use extkit::merge::{merge_with, IgnoreCase, Mapping};
use extkit::query::QueryExt;
use extkit::{Comparison, Config, StrExt};

#[test]
fn test_config_driven_ranking() {
    let config = Config::from_json(
        r#"{"log_filter": "warn", "matcher": {"threshold": 70, "ignore_case": true, "trim": true, "max_results": 2}}"#,
    )
    .unwrap();
    extkit::tracing::init_from_config(&config);
    let matcher = config.matcher().unwrap();

    let ranked = matcher.rank(" douglas ", ["Douglas", "DOUUGLAS", "Dougal", "Margaret"]);

    let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, vec!["Douglas", "DOUUGLAS"]);
}

#[test]
fn test_helpers_compose() {
    let headers: Vec<(&str, &str)> = vec![
        ("Content-Type", "text/plain"),
        ("X-Trace", "  "),
        ("content-type", "application/json"),
        ("Accept", "*/*"),
    ];

    // drop blank values, then fold into a case-insensitive mapping
    let mut left = Mapping::with_comparer(IgnoreCase);
    for (name, value) in headers.iter().where_if(true, |(_, v)| v.is_not_blank()) {
        left.insert(name.to_string(), value.to_string());
    }

    let mut extra = Mapping::with_comparer(IgnoreCase);
    extra.insert("ACCEPT".to_string(), "text/html".to_string());

    let merged = merge_with(&left, Some(&extra), |a, b| format!("{a}, {b}"));

    assert_eq!(merged.len(), 2);
    assert_eq!(
        merged.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(merged.get("accept").map(String::as_str), Some("*/*, text/html"));
    assert!(!merged.contains_key("x-trace"));

    let rewritten = "Accept: TEXT/html"
        .replace_all("text/html", "text/plain", Comparison::IgnoreCase)
        .unwrap();
    assert_eq!(rewritten, "Accept: text/plain");
}
