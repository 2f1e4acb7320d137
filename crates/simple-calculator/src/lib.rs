//! Table-driven calculator exercise.
//!
//! The calculator maps two operands and an operation tag to a number. Invalid
//! input never raises: it yields `None`, the crate's null sentinel.
//!
//! Requests keep non-numeric operands and the tag as raw JSON values so that
//! invalid shapes (a string operand, an unknown tag) remain representable.
//!
//! # Example
//!
//! ```
//! use simple_calculator::{Action, CalculatorRequest, simple_calculator};
//!
//! let request = CalculatorRequest::new(2.0, 3.0, Action::Exponentiate);
//! assert_eq!(simple_calculator(&request), Some(8.0));
//!
//! let invalid = CalculatorRequest::from_json(r#"{"a": 2, "b": "3", "action": "+"}"#)
//!     .expect("well-formed JSON");
//! assert_eq!(simple_calculator(&invalid), None);
//! ```

mod action;
mod calculator;
mod error;
mod request;

pub use action::{Action, UnknownActionError};
pub use calculator::simple_calculator;
pub use error::RequestError;
pub use request::{CalculatorRequest, Operand};
