//! Client event triggering via response headers
//!
//! The htmx client fires DOM events named in the `HX-Trigger` family of
//! response headers, which is how a server asks the page to re-run component
//! initialization after a swap. Each header carries a JSON object mapping
//! event name to an arbitrary detail payload.

use std::fmt;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::headers;

/// Point in the swap lifecycle at which the client fires the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTiming {
    /// As soon as the response is received.
    Receive,
    /// After the settle step.
    AfterSettle,
    /// After the swap step.
    AfterSwap,
}

impl TriggerTiming {
    fn header_name(self) -> HeaderName {
        match self {
            TriggerTiming::Receive => headers::HX_TRIGGER,
            TriggerTiming::AfterSettle => headers::HX_TRIGGER_AFTER_SETTLE,
            TriggerTiming::AfterSwap => headers::HX_TRIGGER_AFTER_SWAP,
        }
    }
}

/// Errors from [`trigger_client_event`].
#[derive(Debug)]
pub enum TriggerError {
    /// The header already holds a value that is not a JSON object.
    Existing(String),
    /// The detail payload could not be serialized.
    Detail(serde_json::Error),
    /// The merged payload is not a legal header value.
    Value(String),
}

impl fmt::Display for TriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerError::Existing(raw) => {
                write!(f, "existing trigger header is not a JSON object: {raw}")
            }
            TriggerError::Detail(err) => write!(f, "failed to serialize event detail: {err}"),
            TriggerError::Value(payload) => {
                write!(f, "merged trigger payload is not a valid header value: {payload}")
            }
        }
    }
}

impl std::error::Error for TriggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriggerError::Detail(err) => Some(err),
            _ => None,
        }
    }
}

/// Add a client event to the response headers.
///
/// The event is merged into any events already recorded for the same timing,
/// so a handler and its middleware can each contribute events without
/// clobbering one another. Calling again with the same event name replaces
/// that event's detail.
pub fn trigger_client_event(
    headers: &mut HeaderMap,
    name: &str,
    detail: impl Serialize,
    timing: TriggerTiming,
) -> Result<(), TriggerError> {
    let header = timing.header_name();

    let mut events = match headers.get(&header) {
        Some(existing) => parse_existing(existing)?,
        None => Map::new(),
    };

    let detail = serde_json::to_value(detail).map_err(TriggerError::Detail)?;
    events.insert(name.to_string(), detail);

    let payload = Value::Object(events).to_string();
    let value = HeaderValue::from_str(&payload).map_err(|_| TriggerError::Value(payload))?;
    headers.insert(header, value);

    Ok(())
}

/// Only the JSON-object form of the header can be merged into. htmx also
/// accepts a bare comma-separated event list here; that form is rejected
/// rather than reinterpreted.
fn parse_existing(value: &HeaderValue) -> Result<Map<String, Value>, TriggerError> {
    let raw = value
        .to_str()
        .map_err(|_| TriggerError::Existing("<opaque header value>".to_string()))?;

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(events)) => Ok(events),
        _ => {
            tracing::debug!(header = raw, "existing trigger header is not a JSON object");
            Err(TriggerError::Existing(raw.to_string()))
        }
    }
}
