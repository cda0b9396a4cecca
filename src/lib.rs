//! Net Salary Engine for Dutch Payroll
//!
//! This crate computes a Dutch employee's net monthly salary from a gross
//! monthly salary and a small set of modifiers (contracted hours, pension
//! contribution, holiday allowance, 13th month), applying the box-1
//! progressive tax brackets and the two wage tax credits.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
