//! URL splitting and reconstruction.
//!
//! Splits `scheme://host/path` strings on the first `://` and the first `/`
//! after it, derives hostname and port from the host on demand, and renders
//! the parts back into a string. No percent-decoding, query parsing or
//! normalization is done.

mod error;
mod host;
mod parse;
mod report;
mod url;

pub use error::ParseError;
pub use host::split_host;
pub use parse::{parse, parse_with, SchemePolicy};
pub use report::UrlReport;
pub use url::Url;

/// Renders an optional URL; absence renders the same as an all-empty URL (`""`).
///
/// # Examples
///
/// - `format(None)` → `""`
/// - `format(Some(&Url::new("https", "foo.com", "")))` → `"https://foo.com"`
pub fn format(url: Option<&Url>) -> String {
    url.map(Url::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_table() {
        let cases: [(Option<Url>, &str); 5] = [
            (None, ""),
            (Some(Url::default()), ""),
            (Some(Url::new("https", "", "")), "https://"),
            (Some(Url::new("https", "foo.com", "")), "https://foo.com"),
            (Some(Url::new("https", "foo.com", "go")), "https://foo.com/go"),
        ];
        for (url, want) in cases {
            assert_eq!(format(url.as_ref()), want, "url: {:?}", url);
        }
    }

    #[test]
    fn hostname_port_table() {
        let cases = [
            ("foo.com:80", "foo.com", "80"),
            ("foo.com:", "foo.com", ""),
            ("foo.com", "foo.com", ""),
            ("1.2.3.4:90", "1.2.3.4", "90"),
            ("1.2.3.4", "1.2.3.4", ""),
        ];
        for (host, hostname, port) in cases {
            let u = Url::default().with_host(host);
            assert_eq!(u.hostname(), hostname, "hostname of {host}");
            assert_eq!(u.port(), port, "port of {host}");
        }
    }

    #[test]
    fn round_trip_canonical_inputs() {
        for s in [
            "https://foo.com/go",
            "https://foo.com",
            "http://1.2.3.4:90/a/b/c",
            "ftp://files.example.org:21/pub/debian",
        ] {
            let u = parse(s).unwrap();
            assert_eq!(format(Some(&u)), s);
        }
    }

    #[test]
    fn format_parse_format_is_stable() {
        let urls = [
            Url::new("https", "", ""),
            Url::new("https", "foo.com", ""),
            Url::new("https", "foo.com", "go"),
            Url::new("http", "foo.com:8080", "a/b"),
        ];
        for u in urls {
            let once = format(Some(&u));
            let again = format(Some(&parse(&once).unwrap()));
            assert_eq!(again, once);
        }
    }

    #[test]
    fn change_scheme_after_parse() {
        let mut u = parse("http://foo.com/go").unwrap();
        u.scheme = "https".to_string();
        assert_eq!(u.to_string(), "https://foo.com/go");
    }
}
