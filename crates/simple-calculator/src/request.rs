//! Calculator request record.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::action::Action;
use crate::error::RequestError;

/// One calculator operand.
///
/// Typed callers supply [`Operand::Number`], which keeps every `f64`
/// including infinities and `NaN`. JSON input that is not a number is kept
/// as [`Operand::Raw`] so that it can be represented and later rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Operand {
    /// A numeric operand.
    Number(f64),
    /// Any other JSON value.
    Raw(Value),
}

impl Operand {
    /// The operand as a number, or `None` when it is not numeric.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Raw(_) => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Value> for Operand {
    /// JSON numbers become [`Operand::Number`]. Integers beyond `f64`
    /// precision round to the nearest representable value.
    fn from(value: Value) -> Self {
        value.as_f64().map_or(Self::Raw(value), Self::Number)
    }
}

impl Serialize for Operand {
    /// Numbers serialise as JSON numbers. `serde_json` writes non-finite
    /// values as `null`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Raw(value) => value.serialize(serializer),
        }
    }
}

/// A `{a, b, action}` triple submitted to the calculator.
///
/// Validation happens when the request is evaluated, so a request with a
/// string operand or an unknown tag can be built and passed around like any
/// other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorRequest {
    /// Left operand.
    pub a: Operand,
    /// Right operand.
    pub b: Operand,
    /// Operation tag, expected to be one of the [`Action`] wire tags.
    pub action: Value,
}

impl CalculatorRequest {
    /// Build a well-typed request.
    ///
    /// Every `f64` is accepted as numeric, so feeding an infinite quotient
    /// back into the calculator still yields a result.
    #[must_use]
    pub fn new(a: f64, b: f64, action: Action) -> Self {
        Self {
            a: Operand::Number(a),
            b: Operand::Number(b),
            action: Value::from(action.tag()),
        }
    }

    /// Build a request from arbitrary JSON values.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use simple_calculator::{CalculatorRequest, simple_calculator};
    ///
    /// let request = CalculatorRequest::from_values(json!(2), json!(3), json!("invalid"));
    /// assert_eq!(simple_calculator(&request), None);
    /// ```
    #[must_use]
    pub fn from_values(a: Value, b: Value, action: Value) -> Self {
        Self {
            a: Operand::from(a),
            b: Operand::from(b),
            action,
        }
    }

    /// Parse a request from a JSON object with `a`, `b`, and `action` keys.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Parse`] when the input is not valid JSON or a
    /// key is missing. Values of the wrong type are accepted.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        serde_json::from_str(json).map_err(|err| RequestError::Parse {
            message: err.to_string(),
        })
    }

    /// Operands as numbers, or `None` when either one is not numeric.
    pub(crate) fn operands(&self) -> Option<(f64, f64)> {
        Some((self.a.as_number()?, self.b.as_number()?))
    }

    /// The recognised action, or `None` for any other tag.
    pub(crate) fn parsed_action(&self) -> Option<Action> {
        self.action.as_str()?.parse().ok()
    }
}
