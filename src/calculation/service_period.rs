//! Service-period assessment.
//!
//! This module computes the three tenure figures the settlement depends on:
//! proportional months of service (with the 15-day accrual rule), plain
//! months for severance-fund accrual, and whole years for the notice rule.

use chrono::{Datelike, NaiveDate};

use crate::models::AuditStep;

/// The result of a service-period assessment, including the audit step.
#[derive(Debug, Clone)]
pub struct ServicePeriodResult {
    /// Whole months of service including the 15-day accrual rule.
    pub counted_months: u32,
    /// Whole months of service without the 15-day rule (fund accrual).
    pub fund_months: u32,
    /// Whole years of service (notice-period rule).
    pub full_years: u32,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Whole calendar months elapsed between two dates.
///
/// A month only counts once the day-of-month of the later date has reached
/// the day-of-month of the earlier date. Negative spans clamp to zero.
fn whole_months(hire_date: NaiveDate, termination_date: NaiveDate) -> u32 {
    if termination_date <= hire_date {
        return 0;
    }

    let mut months = (termination_date.year() as i64 - hire_date.year() as i64) * 12
        + (termination_date.month() as i64 - hire_date.month() as i64);
    if termination_date.day() < hire_date.day() {
        months -= 1;
    }

    months.max(0) as u32
}

/// Computes proportional months of service with the 15-day accrual rule.
///
/// Whole months elapsed (years x 12 + months); if the day-of-month of the
/// termination date is >= 15, one extra month is accrued. Returns 0 when
/// `termination_date <= hire_date`, which callers must treat as an invalid
/// computation.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::months_of_service;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// // 29 whole months, plus one for termination day >= 15
/// assert_eq!(months_of_service(hire, termination), 30);
/// ```
pub fn months_of_service(hire_date: NaiveDate, termination_date: NaiveDate) -> u32 {
    if termination_date <= hire_date {
        return 0;
    }

    let mut months = whole_months(hire_date, termination_date);
    if termination_date.day() >= 15 {
        months += 1;
    }
    months
}

/// Computes months of service for severance-fund accrual.
///
/// The fund accrues per whole month only; the 15-day rule does not apply.
pub fn fund_months(hire_date: NaiveDate, termination_date: NaiveDate) -> u32 {
    whole_months(hire_date, termination_date)
}

/// Computes whole years of service, for the notice-period rule.
pub fn full_years_of_service(hire_date: NaiveDate, termination_date: NaiveDate) -> u32 {
    if termination_date <= hire_date {
        return 0;
    }

    let mut years = termination_date.year() as i64 - hire_date.year() as i64;
    if (termination_date.month(), termination_date.day())
        < (hire_date.month(), hire_date.day())
    {
        years -= 1;
    }

    years.max(0) as u32
}

/// Assesses the full service period and records an audit step.
///
/// # Arguments
///
/// * `hire_date` - The date the employee was hired
/// * `termination_date` - The date the employment ended
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `ServicePeriodResult` with all three tenure figures. A
/// `counted_months` of 0 signals an invalid date range that the caller
/// must reject before producing any line item.
pub fn assess_service_period(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    step_number: u32,
) -> ServicePeriodResult {
    let counted_months = months_of_service(hire_date, termination_date);
    let fund_months = fund_months(hire_date, termination_date);
    let full_years = full_years_of_service(hire_date, termination_date);

    let accrual_rule_applied = termination_date > hire_date && termination_date.day() >= 15;

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_period".to_string(),
        rule_name: "Service Period Assessment".to_string(),
        legal_ref: "CLT art. 146".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "termination_date": termination_date.to_string()
        }),
        output: serde_json::json!({
            "counted_months": counted_months,
            "fund_months": fund_months,
            "full_years": full_years,
            "fifteen_day_rule_applied": accrual_rule_applied
        }),
        reasoning: if accrual_rule_applied {
            format!(
                "{} whole months plus one accrued month (termination day {} >= 15)",
                fund_months,
                termination_date.day()
            )
        } else {
            format!("{} whole months, no accrued month", fund_months)
        },
    };

    ServicePeriodResult {
        counted_months,
        fund_months,
        full_years,
        audit_step,
    }
}
