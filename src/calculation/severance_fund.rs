//! Severance-fund (FGTS) statement calculation.
//!
//! Simplified accrual model: the employer deposits a fixed fraction of the
//! monthly salary for every whole month of service, and the termination
//! penalty is a fixed fraction of the deposited balance. The penalty is
//! computed unconditionally regardless of termination reason; see
//! DESIGN.md for the documented simplification.

use rust_decimal::Decimal;

use crate::config::SeveranceFundRates;
use crate::models::{AuditStep, SeveranceFundStatement};

/// The result of a severance-fund calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SeveranceFundResult {
    /// The fund statement (deposited, penalty, total).
    pub statement: SeveranceFundStatement,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the severance-fund statement for a termination.
///
/// `deposited = salary x fund_months x monthly_rate` and
/// `penalty = deposited x penalty_rate`. The fund total is reported
/// separately from the payroll settlement; it is an account withdrawal,
/// not a payroll line.
///
/// # Arguments
///
/// * `salary` - The monthly base salary
/// * `fund_months` - Whole months of service (no 15-day rule)
/// * `rates` - The accrual and penalty rates
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_severance_fund(
    salary: Decimal,
    fund_months: u32,
    rates: &SeveranceFundRates,
    step_number: u32,
) -> SeveranceFundResult {
    let deposited = salary * Decimal::from(fund_months) * rates.monthly_rate;
    let penalty = deposited * rates.penalty_rate;
    let total = deposited + penalty;

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "Severance Fund Statement".to_string(),
        legal_ref: rates.legal_ref.clone(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "fund_months": fund_months
        }),
        output: serde_json::json!({
            "deposited": deposited.normalize().to_string(),
            "penalty": penalty.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} months x {} = {} deposited; penalty {} x {} = {}",
            salary.normalize(),
            fund_months,
            rates.monthly_rate.normalize(),
            deposited.normalize(),
            deposited.normalize(),
            rates.penalty_rate.normalize(),
            penalty.normalize()
        ),
    };

    SeveranceFundResult {
        statement: SeveranceFundStatement {
            months_counted: fund_months,
            deposited,
            penalty,
            total,
        },
        audit_step,
    }
}
