//! Operation tags understood by the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arithmetic operation applied to a pair of operands.
///
/// Each variant has a single-character wire tag used by JSON requests and by
/// the [`FromStr`] and [`fmt::Display`] implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// `a + b`, tagged `+`.
    #[serde(rename = "+")]
    Add,
    /// `a - b`, tagged `-`.
    #[serde(rename = "-")]
    Subtract,
    /// `a * b`, tagged `*`.
    #[serde(rename = "*")]
    Multiply,
    /// `a / b`, tagged `/`.
    #[serde(rename = "/")]
    Divide,
    /// `a` raised to the power `b`, tagged `^`.
    #[serde(rename = "^")]
    Exponentiate,
}

/// Returned when a tag does not name one of the five [`Action`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calculator action: '{tag}'")]
pub struct UnknownActionError {
    /// The rejected tag.
    pub tag: String,
}

impl Action {
    /// Every recognised action, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Exponentiate,
    ];

    /// Wire tag for this action.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Exponentiate => "^",
        }
    }

    /// Evaluate the action for two operands.
    ///
    /// Division by zero follows IEEE-754 and yields an infinity or `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_calculator::Action;
    ///
    /// assert_eq!(Action::Divide.apply(6.0, 3.0), 2.0);
    /// assert!(Action::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "the calculator operates on floating point operands"
    )]
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Exponentiate => a.powf(b),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Action {
    type Err = UnknownActionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.tag() == tag)
            .ok_or_else(|| UnknownActionError {
                tag: tag.to_owned(),
            })
    }
}
