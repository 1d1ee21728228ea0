//! Routing decision after sentiment analysis.

use deskflow_core::state::TicketState;

pub const ROUTE_ESCALATE: &str = "escalate";
pub const ROUTE_TECHNICAL: &str = "handle_technical";
pub const ROUTE_BILLING: &str = "handle_billing";
pub const ROUTE_GENERAL: &str = "handle_general";

/// Select the handler branch for the current state. First match wins.
///
/// Matching is exact literal string equality: no case folding, no trimming.
/// A classifier that answers `"technical"` (lowercase) or a whole sentence
/// falls through to the general branch. The final arm is a catch-all, so the
/// function is total: it always names one of the four handler targets,
/// including when category or sentiment was never set.
pub fn route_query(state: &TicketState) -> &'static str {
    if state.sentiment().ok() == Some("Negative") {
        return ROUTE_ESCALATE;
    }
    match state.category().ok() {
        Some("Technical") => ROUTE_TECHNICAL,
        Some("Billing") => ROUTE_BILLING,
        _ => ROUTE_GENERAL,
    }
}
