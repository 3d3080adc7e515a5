//! Hostname / port split of a host segment.

/// Splits `host` at its first `:` into `(hostname, port)`.
///
/// The port is empty when there is no colon or the colon is the last character.
/// Nothing is validated: `"a:b:c"` yields `("a", "b:c")`.
pub fn split_host(host: &str) -> (&str, &str) {
    match host.split_once(':') {
        Some((name, port)) => (name, port),
        None => (host, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_port() {
        assert_eq!(split_host("foo.com:80"), ("foo.com", "80"));
        assert_eq!(split_host("1.2.3.4:90"), ("1.2.3.4", "90"));
    }

    #[test]
    fn empty_port() {
        assert_eq!(split_host("foo.com:"), ("foo.com", ""));
    }

    #[test]
    fn without_port() {
        assert_eq!(split_host("foo.com"), ("foo.com", ""));
        assert_eq!(split_host("1.2.3.4"), ("1.2.3.4", ""));
        assert_eq!(split_host(""), ("", ""));
    }

    #[test]
    fn splits_on_first_colon_only() {
        assert_eq!(split_host("a:b:c"), ("a", "b:c"));
        assert_eq!(split_host(":8080"), ("", "8080"));
    }
}
