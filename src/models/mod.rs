//! Data models for the Net Salary Engine.
//!
//! This module contains the input and output records exchanged with the
//! presentation layer: [`CalcInput`], [`CalcOutput`] and the [`InputField`]
//! enumeration used to key validation errors.

mod calc_input;
mod calc_output;

pub use calc_input::{CalcInput, InputField};
pub use calc_output::{Breakdown, CalcOutput};
