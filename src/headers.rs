// Header names for the htmx wire protocol
//
// htmx describes each request it issues through HX-* headers and accepts
// instructions back through HX-* response headers. HeaderName::from_static
// requires the lowercase form.

use axum::http::HeaderName;

/// Set to "true" on every request issued by the htmx client.
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// Set to "true" when the request comes from an hx-boost navigation.
pub const HX_BOOSTED: HeaderName = HeaderName::from_static("hx-boosted");

/// Browser URL at the time the request was issued.
pub const HX_CURRENT_URL: HeaderName = HeaderName::from_static("hx-current-url");

/// Set to "true" when the client is restoring history after a miss in its
/// local history cache.
pub const HX_HISTORY_RESTORE_REQUEST: HeaderName =
    HeaderName::from_static("hx-history-restore-request");

/// User input collected by hx-prompt, when present.
pub const HX_PROMPT: HeaderName = HeaderName::from_static("hx-prompt");

/// Id of the element the client will swap the response into.
pub const HX_TARGET: HeaderName = HeaderName::from_static("hx-target");

/// Id of the element that triggered the request. On responses, the same
/// header carries a JSON object of client events to fire on receive.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Name of the element that triggered the request.
pub const HX_TRIGGER_NAME: HeaderName = HeaderName::from_static("hx-trigger-name");

/// Response header: client events to fire after the settle step.
pub const HX_TRIGGER_AFTER_SETTLE: HeaderName =
    HeaderName::from_static("hx-trigger-after-settle");

/// Response header: client events to fire after the swap step.
pub const HX_TRIGGER_AFTER_SWAP: HeaderName =
    HeaderName::from_static("hx-trigger-after-swap");
