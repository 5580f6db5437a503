// Partial-render decision
//
// htmx swaps the response into the element named by HX-Target. When that
// target is the full-page container, or the request did not come from htmx
// at all, the handler must render the complete page; any other target gets
// only the matching fragment.

use crate::request::HtmxDetails;

/// DOM id of the element wrapping the full page body.
pub const PAGE_CONTAINER_ID: &str = "page-content";

/// Determines whether to render a partial response.
///
/// True iff the request was issued by htmx and targets something other than
/// the full-page container. An htmx request that declares no target also
/// renders partial.
pub fn render_partial(htmx: &HtmxDetails) -> bool {
    htmx.is_htmx_request() && htmx.target() != Some(PAGE_CONTAINER_ID)
}
