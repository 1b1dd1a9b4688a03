//! Validation engine
//!
//! The engine walks a payload in the order rules were declared. For every
//! node it evaluates each constraint group independently, then descends into
//! children: once for an object value, once per object element for a list.
//!
//! It never fails and never stops early. The full [`Outcome`] goes back to
//! the caller, who picks how to escalate it (see [`Outcome::escalate`]).

pub mod outcome;
pub mod validator;
mod walk;

pub use outcome::{Outcome, Rejection, Report};
pub use validator::{Validator, validate};
