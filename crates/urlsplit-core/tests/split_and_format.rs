//! Integration test: split URLs through the public API and rebuild them.

use urlsplit_core::url_model::UrlReport;
use urlsplit_core::{format, parse, parse_with, ParseError, SchemePolicy, Url};

#[test]
fn parse_then_change_scheme_prints_new_url() {
    let mut u = parse("http://foo.com/go").expect("parse");
    u.set_scheme("https");
    assert_eq!(u.to_string(), "https://foo.com/go");
}

#[test]
fn parse_rejects_inputs_without_scheme() {
    for input in ["foo.com", "://foo.com", "", "mailto:someone@example.com"] {
        assert_eq!(parse(input), Err(ParseError::MissingScheme), "input {input:?}");
    }
    assert_eq!(ParseError::MissingScheme.to_string(), "missing scheme");
}

#[test]
fn lenient_policy_keeps_empty_scheme() {
    let u = parse_with("://foo.com:80/x", SchemePolicy::Lenient).expect("lenient parse");
    assert_eq!(u.scheme, "");
    assert_eq!(u.hostname(), "foo.com");
    assert_eq!(u.port(), "80");
    assert_eq!(format(Some(&u)), "foo.com:80/x");
}

#[test]
fn absent_url_formats_empty() {
    let missing: Option<Url> = parse("foo.com").ok();
    assert_eq!(format(missing.as_ref()), "");
}

#[test]
fn report_describes_parsed_url() {
    let u = parse("https://api.example.com:8443/v1/users").expect("parse");
    let report = UrlReport::from(&u);
    assert_eq!(report.scheme, "https");
    assert_eq!(report.hostname, "api.example.com");
    assert_eq!(report.port, "8443");
    assert_eq!(report.path, "v1/users");
    assert_eq!(report.formatted, "https://api.example.com:8443/v1/users");
}

#[test]
fn url_is_shareable_across_threads() {
    let u = std::sync::Arc::new(parse("https://foo.com/go").expect("parse"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let u = u.clone();
            std::thread::spawn(move || u.to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "https://foo.com/go");
    }
}
