//! htmx request metadata
//!
//! htmx annotates every request it issues with `HX-*` headers describing the
//! element that triggered it and the element it intends to swap. This module
//! parses those headers once into [`HtmxDetails`] so handlers can make
//! rendering decisions without touching raw headers. The axum extractor impl
//! makes the details available as a plain handler argument.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use serde::Serialize;

use crate::headers;

/// Metadata parsed from the htmx request headers.
///
/// For a request not issued by htmx every field is absent and
/// [`is_htmx_request`](Self::is_htmx_request) returns false; there is no
/// error case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HtmxDetails {
    htmx_request: bool,
    boosted: bool,
    history_restore_request: bool,
    current_url: Option<String>,
    prompt: Option<String>,
    target: Option<String>,
    trigger: Option<String>,
    trigger_name: Option<String>,
}

impl HtmxDetails {
    /// Parse htmx metadata out of a request header map.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let details = Self {
            htmx_request: bool_header(headers, &headers::HX_REQUEST),
            boosted: bool_header(headers, &headers::HX_BOOSTED),
            history_restore_request: bool_header(headers, &headers::HX_HISTORY_RESTORE_REQUEST),
            current_url: string_header(headers, &headers::HX_CURRENT_URL),
            prompt: string_header(headers, &headers::HX_PROMPT),
            target: string_header(headers, &headers::HX_TARGET),
            trigger: string_header(headers, &headers::HX_TRIGGER),
            trigger_name: string_header(headers, &headers::HX_TRIGGER_NAME),
        };

        if details.htmx_request {
            tracing::trace!(
                hx_target = details.target.as_deref().unwrap_or(""),
                boosted = details.boosted,
                "htmx request detected"
            );
        }

        details
    }

    /// Whether the request was issued by htmx at all.
    pub fn is_htmx_request(&self) -> bool {
        self.htmx_request
    }

    /// Whether the request comes from an hx-boost navigation.
    pub fn boosted(&self) -> bool {
        self.boosted
    }

    /// Whether the client is restoring history after a cache miss.
    pub fn history_restore_request(&self) -> bool {
        self.history_restore_request
    }

    /// Browser URL at the time the request was issued, verbatim.
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// User input collected by hx-prompt.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Id of the element the client will swap the response into.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Id of the element that triggered the request.
    pub fn trigger(&self) -> Option<&str> {
        self.trigger.as_deref()
    }

    /// Name of the element that triggered the request.
    pub fn trigger_name(&self) -> Option<&str> {
        self.trigger_name.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for HtmxDetails
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Boolean htmx headers carry the literal string "true".
fn bool_header(headers: &HeaderMap, name: &HeaderName) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn string_header(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    #[test]
    fn test_plain_request_has_no_metadata() {
        let details = HtmxDetails::from_headers(&HeaderMap::new());

        assert!(!details.is_htmx_request());
        assert!(!details.boosted());
        assert!(!details.history_restore_request());
        assert_eq!(details.target(), None);
        assert_eq!(details.trigger(), None);
    }

    #[test]
    fn test_htmx_flag_requires_literal_true() {
        // htmx sends exactly "true"; anything else is not an htmx request
        for value in ["false", "1", "TRUE", "yes"] {
            let mut headers = HeaderMap::new();
            headers.insert(crate::headers::HX_REQUEST, value.parse().unwrap());
            let details = HtmxDetails::from_headers(&headers);
            assert!(!details.is_htmx_request(), "value {value:?} accepted");
        }
    }

    #[test]
    fn test_string_fields_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(crate::headers::HX_REQUEST, "true".parse().unwrap());
        headers.insert(crate::headers::HX_TARGET, "object-list".parse().unwrap());
        headers.insert(crate::headers::HX_TRIGGER, "refresh-button".parse().unwrap());
        headers.insert(crate::headers::HX_TRIGGER_NAME, "refresh".parse().unwrap());
        headers.insert(
            crate::headers::HX_CURRENT_URL,
            "http://localhost:8000/devices/".parse().unwrap(),
        );

        let details = HtmxDetails::from_headers(&headers);

        assert!(details.is_htmx_request());
        assert_eq!(details.target(), Some("object-list"));
        assert_eq!(details.trigger(), Some("refresh-button"));
        assert_eq!(details.trigger_name(), Some("refresh"));
        assert_eq!(details.current_url(), Some("http://localhost:8000/devices/"));
        assert_eq!(details.prompt(), None);
    }

    #[test]
    fn test_opaque_header_value_ignored() {
        // Header values outside visible ASCII fail to_str and read as absent
        let mut headers = HeaderMap::new();
        headers.insert(crate::headers::HX_REQUEST, "true".parse().unwrap());
        headers.insert(
            crate::headers::HX_TARGET,
            HeaderValue::from_bytes(b"side\xffbar").unwrap(),
        );

        let details = HtmxDetails::from_headers(&headers);

        assert!(details.is_htmx_request());
        assert_eq!(details.target(), None);
    }

    #[tokio::test]
    async fn test_extractor_reads_request_parts() {
        let request = Request::builder()
            .uri("/devices/")
            .header("hx-request", "true")
            .header("hx-boosted", "true")
            .header("hx-target", "sidebar")
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let details =
            <HtmxDetails as FromRequestParts<()>>::from_request_parts(&mut parts, &())
                .await
                .unwrap();

        assert!(details.is_htmx_request());
        assert!(details.boosted());
        assert_eq!(details.target(), Some("sidebar"));
    }
}
