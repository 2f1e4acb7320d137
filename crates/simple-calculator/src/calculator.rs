//! The calculator function.

use tracing::trace;

use crate::request::CalculatorRequest;

/// Evaluate a calculator request.
///
/// Returns `None` when either operand is not a number or the action tag is
/// not one of the recognised [`Action`](crate::Action) tags. No other input
/// is rejected: dividing by zero yields an infinity or `NaN`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use simple_calculator::{Action, CalculatorRequest, simple_calculator};
///
/// let sum = CalculatorRequest::new(2.0, 3.0, Action::Add);
/// assert_eq!(simple_calculator(&sum), Some(5.0));
///
/// let unknown = CalculatorRequest::from_values(json!(2), json!(3), json!("invalid"));
/// assert_eq!(simple_calculator(&unknown), None);
/// ```
#[must_use]
pub fn simple_calculator(request: &CalculatorRequest) -> Option<f64> {
    let Some((a, b)) = request.operands() else {
        trace!(a = ?request.a, b = ?request.b, "rejecting non-numeric operand");
        return None;
    };
    let Some(action) = request.parsed_action() else {
        trace!(action = %request.action, "rejecting unknown action");
        return None;
    };
    Some(action.apply(a, b))
}
