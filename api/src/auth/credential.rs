//! Bearer credential extraction

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sha2::{Digest, Sha256};

/// Extract the raw credential from the Authorization header
///
/// The header value is passed on verbatim (scheme included); the
/// authorization service decides what a valid credential looks like.
/// Missing, blank or non-UTF-8 headers yield `None`.
pub fn extract_credential(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.trim().is_empty())
}

/// Short SHA-256 fingerprint of a credential, safe to log
pub fn fingerprint(credential: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credential.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_header_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));

        assert_eq!(extract_credential(&headers), Some("Bearer abc.def"));
    }

    #[test]
    fn missing_or_blank_header_is_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_credential(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("   "));
        assert_eq!(extract_credential(&headers), None);
    }

    #[test]
    fn non_utf8_header_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());

        assert_eq!(extract_credential(&headers), None);
    }

    #[test]
    fn fingerprint_is_stable_and_hides_credential() {
        let a = fingerprint("Bearer secret-token");
        let b = fingerprint("Bearer secret-token");

        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(!a.contains("secret"));
        assert_ne!(a, fingerprint("Bearer other-token"));
    }
}
