use once_cell::sync::OnceCell;
use regex::Regex;

use crate::{Error, Result};

const DID_PATTERN: &str = r"(?x)
    ^
    (?P<did>
        did                         # scheme
        :
        [a-z0-9]+                   # method
        :
        (?:[a-zA-Z0-9._%-]*:)*      # optional method specific sub-ids, postfixed with a ':'
        [a-zA-Z0-9._%-]+            # method specific identifier
    )
    (?P<path>/[^?\#]*)?             # optional path
    (?P<query>\?[^\#]*)?            # optional query
    (?:\#(?P<fragment>.+))?         # optional fragment
    $
";

/// `true` if `value` references a single verification method, e.g. `did:example:alice#key-1`.
pub fn is_did_url(value: &str) -> bool {
    value.contains('#')
}

/// Extracts the DID part from a DID URL (drops path, query and fragment).
/// Plain DIDs are returned unchanged.
pub fn did_of(value: &str) -> &str {
    let end = value.find(|c| c == '#' || c == '?' || c == '/').unwrap_or(value.len());
    &value[..end]
}

fn did_regex() -> Result<&'static Regex> {
    static DID_REGEX: OnceCell<Regex> = OnceCell::new();
    Ok(DID_REGEX.get_or_try_init(|| Regex::new(DID_PATTERN))?)
}

/// Splits `value` into its DID and optional fragment after checking DID syntax.
pub fn parse(value: &str) -> Result<(String, Option<String>)> {
    let captures = did_regex()?
        .captures(value)
        .ok_or_else(|| Error::IllegalArgument(format!("'{}' is not a DID or DID URL", value)))?;
    let did = captures
        .name("did")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let fragment = captures.name("fragment").map(|m| m.as_str().to_string());
    Ok((did, fragment))
}

/// Fails with [`Error::IllegalArgument`] unless `value` is a plain DID without fragment.
pub fn validate_did(value: &str, what: &str) -> Result<()> {
    match parse(value)? {
        (_, None) if !value.contains('/') && !value.contains('?') => Ok(()),
        _ => Err(Error::IllegalArgument(format!(
            "`{}` value is not a DID: '{}'",
            what, value
        ))),
    }
}

/// Fails with [`Error::IllegalArgument`] unless `value` is a DID or a DID URL with fragment.
pub fn validate_did_or_did_url(value: &str, what: &str) -> Result<()> {
    parse(value).map(|_| ()).map_err(|_| {
        Error::IllegalArgument(format!("`{}` value is not a DID or DID URL: '{}'", what, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fragment() {
        let (did, fragment) = parse("did:example:alice#key-x25519-1").unwrap();
        assert_eq!(did, "did:example:alice");
        assert_eq!(fragment.as_deref(), Some("key-x25519-1"));
        assert_eq!(did_of("did:example:alice#key-x25519-1"), "did:example:alice");
    }

    #[test]
    fn accepts_sub_ids() {
        let (did, fragment) = parse("did:web:example.com:user:alice").unwrap();
        assert_eq!(did, "did:web:example.com:user:alice");
        assert!(fragment.is_none());
    }

    #[test]
    fn did_validation_rejects_did_urls() {
        assert!(validate_did("did:example:alice", "from").is_ok());
        assert!(matches!(
            validate_did("did:example:alice#key-1", "from"),
            Err(Error::IllegalArgument(_))
        ));
        assert!(matches!(
            validate_did("http://example.com", "to"),
            Err(Error::IllegalArgument(_))
        ));
    }

    #[test]
    fn pattern_is_compiled_once() {
        let first = did_regex().unwrap();
        let second = did_regex().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn did_url_detection() {
        assert!(is_did_url("did:example:bob#key-1"));
        assert!(!is_did_url("did:example:bob"));
    }
}
