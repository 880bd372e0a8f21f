//! Termination Settlement Engine for Brazilian CLT employment contracts.
//!
//! This crate computes the itemized settlement owed to an employee on
//! termination: salary balance, proportional 13th salary, vacation pay,
//! notice-period indemnity, tax withholdings (INSS and IRRF) and the
//! severance fund (FGTS) statement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
