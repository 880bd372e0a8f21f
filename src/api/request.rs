//! Request types for the Termination Settlement Engine API.
//!
//! This module defines the JSON request structure for the `/settlement`
//! endpoint and its field validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmploymentRecord, TerminationReason};

/// Request body for the `/settlement` endpoint.
///
/// Contains the employment record needed to calculate a termination
/// settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// The date employment started.
    pub hire_date: NaiveDate,
    /// The date employment ended.
    pub termination_date: NaiveDate,
    /// The termination reason.
    pub reason: TerminationReason,
    /// Days worked in the final partial month.
    pub days_worked_final_month: u32,
    /// Number of income-tax dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Fully accrued but unused vacation periods.
    #[serde(default)]
    pub expired_vacation_periods: u32,
}

impl SettlementRequest {
    /// Validates the request fields and converts it into a domain record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when the salary is not
    /// positive or a count field is out of range. The date ordering is
    /// not checked here; the calculation rejects it with the full
    /// service-period context.
    pub fn validate(self) -> EngineResult<EmploymentRecord> {
        if self.base_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "base_salary".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.days_worked_final_month > 31 {
            return Err(EngineError::InvalidInput {
                field: "days_worked_final_month".to_string(),
                message: "must be between 0 and 31".to_string(),
            });
        }
        if self.dependents > 10 {
            return Err(EngineError::InvalidInput {
                field: "dependents".to_string(),
                message: "must be between 0 and 10".to_string(),
            });
        }
        if self.expired_vacation_periods > 2 {
            return Err(EngineError::InvalidInput {
                field: "expired_vacation_periods".to_string(),
                message: "must be between 0 and 2".to_string(),
            });
        }

        Ok(EmploymentRecord {
            base_salary: self.base_salary,
            hire_date: self.hire_date,
            termination_date: self.termination_date,
            reason: self.reason,
            days_worked_final_month: self.days_worked_final_month,
            dependents: self.dependents,
            expired_vacation_periods: self.expired_vacation_periods,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> SettlementRequest {
        SettlementRequest {
            base_salary: dec("2400.00"),
            hire_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            termination_date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            reason: TerminationReason::WithoutCause,
            days_worked_final_month: 20,
            dependents: 0,
            expired_vacation_periods: 0,
        }
    }

    #[test]
    fn test_deserialize_settlement_request() {
        let json = r#"{
            "base_salary": "2400.00",
            "hire_date": "2022-01-01",
            "termination_date": "2024-06-20",
            "reason": "without_cause",
            "days_worked_final_month": 20,
            "dependents": 1,
            "expired_vacation_periods": 1
        }"#;

        let request: SettlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_salary, dec("2400.00"));
        assert_eq!(request.reason, TerminationReason::WithoutCause);
        assert_eq!(request.dependents, 1);
    }

    #[test]
    fn test_optional_counts_default_to_zero() {
        let json = r#"{
            "base_salary": "2400.00",
            "hire_date": "2022-01-01",
            "termination_date": "2024-06-20",
            "reason": "with_cause",
            "days_worked_final_month": 20
        }"#;

        let request: SettlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dependents, 0);
        assert_eq!(request.expired_vacation_periods, 0);
    }

    #[test]
    fn test_valid_request_converts_to_record() {
        let record = create_valid_request().validate().unwrap();
        assert_eq!(record.base_salary, dec("2400.00"));
        assert_eq!(record.days_worked_final_month, 20);
    }

    #[test]
    fn test_non_positive_salary_rejected() {
        let mut request = create_valid_request();
        request.base_salary = Decimal::ZERO;

        match request.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "base_salary");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_days_worked_over_31_rejected() {
        let mut request = create_valid_request();
        request.days_worked_final_month = 32;

        match request.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "days_worked_final_month");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_dependents_over_10_rejected() {
        let mut request = create_valid_request();
        request.dependents = 11;

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_expired_periods_over_2_rejected() {
        let mut request = create_valid_request();
        request.expired_vacation_periods = 3;

        assert!(request.validate().is_err());
    }
}
