//! Notice-period indemnity calculation.
//!
//! This module computes the payment in lieu of working the notice period,
//! scaled by tenure per Lei 12.506/2011: 30 days plus 3 days per whole
//! year of service, capped at 90 days. Only without-cause terminations
//! are entitled to the indemnity.

use rust_decimal::Decimal;

use crate::config::NoticeRule;
use crate::models::{AuditStep, EarningCategory, EarningLine, TerminationReason};

/// The result of a notice-period calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NoticePeriodResult {
    /// The indemnity value ((salary / 30) x days).
    pub value: Decimal,
    /// The notice days owed.
    pub days: u32,
    /// Whether the tenure-scaled days hit the legal cap.
    pub capped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl NoticePeriodResult {
    /// Builds the settlement earning line for this indemnity. A with-cause
    /// termination yields a zero-amount line; the line is kept so the
    /// itemization stays complete.
    pub fn value_line(&self) -> EarningLine {
        EarningLine {
            category: EarningCategory::NoticeIndemnity,
            description: format!("Notice period indemnity ({} day(s))", self.days),
            amount: self.value,
            legal_ref: self.audit_step.legal_ref.clone(),
        }
    }
}

/// Computes the notice-period indemnity.
///
/// Applies only when the termination is without cause; otherwise returns
/// a zero value and zero days. Days are `base_days + days_per_year x
/// full_years`, capped at `max_days`.
///
/// # Arguments
///
/// * `salary` - The monthly base salary
/// * `full_years` - Whole years of service
/// * `reason` - The termination reason
/// * `rule` - The notice rule parameters
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_notice_period(
    salary: Decimal,
    full_years: u32,
    reason: TerminationReason,
    rule: &NoticeRule,
    step_number: u32,
) -> NoticePeriodResult {
    if reason != TerminationReason::WithoutCause {
        let audit_step = AuditStep {
            step_number,
            rule_id: "notice_period".to_string(),
            rule_name: "Notice Period Indemnity".to_string(),
            legal_ref: rule.legal_ref.clone(),
            input: serde_json::json!({
                "reason": "with_cause",
                "full_years": full_years
            }),
            output: serde_json::json!({
                "days": 0,
                "value": "0"
            }),
            reasoning: "No notice indemnity for with-cause termination".to_string(),
        };

        return NoticePeriodResult {
            value: Decimal::ZERO,
            days: 0,
            capped: false,
            audit_step,
        };
    }

    let uncapped_days = rule.base_days + rule.days_per_year * full_years;
    let capped = uncapped_days > rule.max_days;
    let days = uncapped_days.min(rule.max_days);

    let value = salary / Decimal::from(30) * Decimal::from(days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_period".to_string(),
        rule_name: "Notice Period Indemnity".to_string(),
        legal_ref: rule.legal_ref.clone(),
        input: serde_json::json!({
            "reason": "without_cause",
            "salary": salary.normalize().to_string(),
            "full_years": full_years
        }),
        output: serde_json::json!({
            "days": days,
            "cap_applied": capped,
            "value": value.normalize().to_string()
        }),
        reasoning: if capped {
            format!(
                "{} + {} x {} years exceeds the cap; {} days x daily rate",
                rule.base_days, rule.days_per_year, full_years, days
            )
        } else {
            format!(
                "{} + {} x {} years = {} days x daily rate",
                rule.base_days, rule.days_per_year, full_years, days
            )
        },
    };

    NoticePeriodResult {
        value,
        days,
        capped,
        audit_step,
    }
}
