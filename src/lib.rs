//! htmx support for axum services: request detection and the partial-render
//! decision.
//!
//! htmx requests advertise themselves through `HX-*` headers. This crate
//! parses those headers into typed metadata ([`HtmxDetails`]) and decides
//! whether a handler should render only the fragment the client intends to
//! swap ([`render_partial`]) or the complete page. The response side of the
//! protocol is covered by [`trigger_client_event`], which fires client-side
//! events through the `HX-Trigger` headers.
//!
//! ```
//! use axum::http::HeaderMap;
//! use hx_partial::{render_partial, HtmxDetails};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("hx-request", "true".parse().unwrap());
//! headers.insert("hx-target", "sidebar".parse().unwrap());
//!
//! let htmx = HtmxDetails::from_headers(&headers);
//! assert!(render_partial(&htmx));
//! ```

pub mod headers;
pub mod partial;
pub mod request;
pub mod response;

pub use partial::{render_partial, PAGE_CONTAINER_ID};
pub use request::HtmxDetails;
pub use response::{trigger_client_event, TriggerError, TriggerTiming};
