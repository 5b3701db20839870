use url::Url;

/// A syntactically valid http(s) URL, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedUrl(Url);

impl CheckedUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidUrl;

/// Classifies a raw string as a well-formed URL.
///
/// Accepts only `http`/`https` addresses with a non-empty host. Runs before
/// any network access, so clearly malformed input never costs a request.
pub fn validate(raw: &str) -> Result<CheckedUrl, InvalidUrl> {
    let parsed = Url::parse(raw).map_err(|_| InvalidUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(InvalidUrl);
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(CheckedUrl(parsed)),
        _ => Err(InvalidUrl),
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, InvalidUrl};

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(
            validate("http://localhost/").unwrap().as_str(),
            "http://localhost/"
        );
        assert!(validate("https://example.com/api?x=1").is_ok());
    }

    #[test]
    fn rejects_strings_without_scheme() {
        assert_eq!(validate("htt"), Err(InvalidUrl));
        assert_eq!(validate("blablabla"), Err(InvalidUrl));
        assert_eq!(validate(""), Err(InvalidUrl));
    }

    #[test]
    fn rejects_unsupported_schemes_and_empty_hosts() {
        assert_eq!(validate("ftp://example.com/"), Err(InvalidUrl));
        assert_eq!(validate("file:///etc/passwd"), Err(InvalidUrl));
        assert_eq!(validate("http://"), Err(InvalidUrl));
    }
}
