//! Employment record model and related types.
//!
//! This module defines the EmploymentRecord struct and TerminationReason enum
//! that describe a single termination to be settled.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the legal reason for the termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Dismissal without cause (entitles the employee to notice indemnity).
    WithoutCause,
    /// Dismissal with cause (no notice indemnity).
    WithCause,
}

/// Represents one employment termination to be settled.
///
/// The record is constructed from a validated request, consumed by the
/// calculation pipeline synchronously, and discarded after the result is
/// rendered. It carries no identity beyond the single computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    /// The monthly gross base salary.
    pub base_salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date the employment ended. Must strictly follow the hire date.
    pub termination_date: NaiveDate,
    /// The legal reason for the termination.
    pub reason: TerminationReason,
    /// Days actually worked in the final partial month (0-31).
    pub days_worked_final_month: u32,
    /// Number of income-tax dependents (0-10).
    pub dependents: u32,
    /// Expired (unused) vacation periods owed from prior years (0-2).
    pub expired_vacation_periods: u32,
}

impl EmploymentRecord {
    /// Returns true when the termination was without cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::models::{EmploymentRecord, TerminationReason};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmploymentRecord {
    ///     base_salary: Decimal::new(240000, 2),
    ///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
    ///     termination_date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
    ///     reason: TerminationReason::WithoutCause,
    ///     days_worked_final_month: 20,
    ///     dependents: 0,
    ///     expired_vacation_periods: 0,
    /// };
    /// assert!(record.is_without_cause());
    /// ```
    pub fn is_without_cause(&self) -> bool {
        self.reason == TerminationReason::WithoutCause
    }
}
