//! Income-tax (IRRF) withholding calculation.
//!
//! This module applies the single-bracket schedule: a fixed per-dependent
//! deduction is subtracted from the base, one bracket is selected by
//! first ascending match, and its flat rate and fixed deduction apply to
//! the whole adjusted base. This is deliberately NOT marginal accrual.

use rust_decimal::Decimal;

use crate::config::IncomeTaxTable;
use crate::models::AuditStep;

/// The result of an income-tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The withheld amount, floored at zero.
    pub amount: Decimal,
    /// The base after the dependent deduction.
    pub adjusted_base: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the income-tax withholding on a base.
///
/// The per-dependent deduction is subtracted from the base first. The
/// bracket is the first one (ascending) whose upper limit is not exceeded
/// by the adjusted base; when none matches, the schedule's top rate and
/// deduction apply. `tax = adjusted_base x rate - deduction`, floored at
/// zero.
///
/// # Arguments
///
/// * `base` - The taxable base before the dependent deduction
/// * `dependents` - Number of dependents to deduct for
/// * `schedule` - The bracket schedule to apply
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_income_tax;
/// use settlement_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/clt_2024").unwrap();
/// let result = calculate_income_tax(
///     Decimal::from_str("1477.18").unwrap(),
///     0,
///     loader.tables().income_tax(),
///     1,
/// );
/// // Inside the exempt bracket
/// assert_eq!(result.amount, Decimal::ZERO);
/// ```
pub fn calculate_income_tax(
    base: Decimal,
    dependents: u32,
    schedule: &IncomeTaxTable,
    step_number: u32,
) -> IncomeTaxResult {
    let dependent_relief = schedule.dependent_deduction * Decimal::from(dependents);
    let adjusted_base = base - dependent_relief;

    let (rate, deduction) = schedule
        .brackets
        .iter()
        .find(|b| adjusted_base <= b.upper_limit)
        .map(|b| (b.rate, b.deduction))
        .unwrap_or((schedule.top.rate, schedule.top.deduction));

    let amount = (adjusted_base * rate - deduction).max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax Withholding".to_string(),
        legal_ref: schedule.legal_ref.clone(),
        input: serde_json::json!({
            "base": base.normalize().to_string(),
            "dependents": dependents
        }),
        output: serde_json::json!({
            "adjusted_base": adjusted_base.normalize().to_string(),
            "rate": rate.normalize().to_string(),
            "bracket_deduction": deduction.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Adjusted base {} x {} - {} = {}",
            adjusted_base.normalize(),
            rate.normalize(),
            deduction.normalize(),
            amount.normalize()
        ),
    };

    IncomeTaxResult {
        amount,
        adjusted_base,
        audit_step,
    }
}
