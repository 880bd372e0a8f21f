//! Gross earning line calculations.
//!
//! This module builds the gross line items of a settlement other than the
//! notice indemnity: salary balance for the final partial month, the
//! proportional 13th-month bonus, proportional vacation pay with its
//! one-third bonus, and expired vacation pay with its one-third bonus.
//!
//! Proration follows the source rules: salary balance uses a 30-day
//! commercial month, and both the 13th salary and vacation accrue one
//! twelfth per counted month of service.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EarningCategory, EarningLine};

/// The result of building one earning line, including the audit step.
#[derive(Debug, Clone)]
pub struct EarningResult {
    /// The earning line.
    pub line: EarningLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the salary balance for days worked in the final month.
///
/// `(salary / 30) x days_worked`. A zero-day final month produces a
/// zero-amount line; the line is kept so the itemization stays complete.
pub fn calculate_salary_balance(
    salary: Decimal,
    days_worked: u32,
    step_number: u32,
) -> EarningResult {
    let amount = salary / Decimal::from(30) * Decimal::from(days_worked);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_balance".to_string(),
        rule_name: "Salary Balance".to_string(),
        legal_ref: "CLT art. 477".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "days_worked": days_worked
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "({} / 30) x {} days = {}",
            salary.normalize(),
            days_worked,
            amount.normalize()
        ),
    };

    EarningResult {
        line: EarningLine {
            category: EarningCategory::SalaryBalance,
            description: format!("Salary balance for {} day(s) worked", days_worked),
            amount,
            legal_ref: "CLT art. 477".to_string(),
        },
        audit_step,
    }
}

/// Computes the proportional 13th-month bonus.
///
/// One twelfth of the salary per counted month of service.
pub fn calculate_thirteenth_salary(
    salary: Decimal,
    counted_months: u32,
    step_number: u32,
) -> EarningResult {
    let amount = salary / Decimal::from(12) * Decimal::from(counted_months);

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_salary".to_string(),
        rule_name: "Proportional 13th Salary".to_string(),
        legal_ref: "Lei 4.090/1962".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "counted_months": counted_months
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "({} / 12) x {} months = {}",
            salary.normalize(),
            counted_months,
            amount.normalize()
        ),
    };

    EarningResult {
        line: EarningLine {
            category: EarningCategory::ThirteenthSalary,
            description: format!("Proportional 13th salary ({} month(s))", counted_months),
            amount,
            legal_ref: "Lei 4.090/1962".to_string(),
        },
        audit_step,
    }
}

/// Computes proportional vacation pay plus the one-third bonus.
///
/// The proportional base is one twelfth of the salary per counted month;
/// the statutory one-third bonus is added on top, in a single line.
pub fn calculate_proportional_vacation(
    salary: Decimal,
    counted_months: u32,
    step_number: u32,
) -> EarningResult {
    let base = salary / Decimal::from(12) * Decimal::from(counted_months);
    let third = base / Decimal::from(3);
    let amount = base + third;

    let audit_step = AuditStep {
        step_number,
        rule_id: "proportional_vacation".to_string(),
        rule_name: "Proportional Vacation + 1/3".to_string(),
        legal_ref: "CLT art. 146".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "counted_months": counted_months
        }),
        output: serde_json::json!({
            "base": base.normalize().to_string(),
            "one_third": third.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "({} / 12) x {} months = {} plus one third {} = {}",
            salary.normalize(),
            counted_months,
            base.normalize(),
            third.normalize(),
            amount.normalize()
        ),
    };

    EarningResult {
        line: EarningLine {
            category: EarningCategory::ProportionalVacation,
            description: format!(
                "Proportional vacation + 1/3 ({} month(s))",
                counted_months
            ),
            amount,
            legal_ref: "CLT art. 146".to_string(),
        },
        audit_step,
    }
}

/// Computes expired vacation pay plus the one-third bonus.
///
/// Each expired period is worth one full salary plus a third.
pub fn calculate_expired_vacation(
    salary: Decimal,
    periods: u32,
    step_number: u32,
) -> EarningResult {
    let per_period = salary + salary / Decimal::from(3);
    let amount = Decimal::from(periods) * per_period;

    let audit_step = AuditStep {
        step_number,
        rule_id: "expired_vacation".to_string(),
        rule_name: "Expired Vacation + 1/3".to_string(),
        legal_ref: "CLT art. 137".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "periods": periods
        }),
        output: serde_json::json!({
            "per_period": per_period.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} period(s) x ({} + {}/3) = {}",
            periods,
            salary.normalize(),
            salary.normalize(),
            amount.normalize()
        ),
    };

    EarningResult {
        line: EarningLine {
            category: EarningCategory::ExpiredVacation,
            description: format!("Expired vacation + 1/3 ({} period(s))", periods),
            amount,
            legal_ref: "CLT art. 137".to_string(),
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// EA-001: salary balance prorates over a 30-day month
    #[test]
    fn test_salary_balance_prorates() {
        let result = calculate_salary_balance(dec("2400.00"), 20, 1);
        assert_eq!(result.line.amount, dec("1600.00"));
        assert_eq!(result.line.category, EarningCategory::SalaryBalance);
    }

    /// EA-002: zero days worked produces a zero line, not a missing one
    #[test]
    fn test_salary_balance_zero_days() {
        let result = calculate_salary_balance(dec("2400.00"), 0, 1);
        assert_eq!(result.line.amount, Decimal::ZERO);
    }

    /// EA-003: full final month pays slightly above the salary
    #[test]
    fn test_salary_balance_31_days() {
        let result = calculate_salary_balance(dec("3000.00"), 31, 1);
        // (3000.00 / 30) * 31 = 3100.00; the commercial 30-day month is
        // the source behavior for 31-day months.
        assert_eq!(result.line.amount, dec("3100.00"));
    }

    /// EA-004: thirteenth salary accrues one twelfth per month
    #[test]
    fn test_thirteenth_salary_accrual() {
        let result = calculate_thirteenth_salary(dec("2400.00"), 30, 1);
        assert_eq!(result.line.amount, dec("6000.00"));
    }

    /// EA-005: proportional vacation adds the one-third bonus
    #[test]
    fn test_proportional_vacation_adds_third() {
        let result = calculate_proportional_vacation(dec("2400.00"), 30, 1);
        // base 6000.00, third 2000.00
        assert_eq!(result.line.amount, dec("8000.00"));
        assert_eq!(
            result.audit_step.output["base"].as_str().unwrap(),
            "6000"
        );
        assert_eq!(
            result.audit_step.output["one_third"].as_str().unwrap(),
            "2000"
        );
    }

    /// EA-006: expired vacation pays salary plus a third per period
    #[test]
    fn test_expired_vacation_per_period() {
        let result = calculate_expired_vacation(dec("2400.00"), 2, 1);
        // 2 * (2400.00 + 800.00) = 6400.00
        assert_eq!(result.line.amount, dec("6400.00"));
    }

    /// EA-007: zero expired periods produce a zero line
    #[test]
    fn test_expired_vacation_zero_periods() {
        let result = calculate_expired_vacation(dec("2400.00"), 0, 1);
        assert_eq!(result.line.amount, Decimal::ZERO);
        assert_eq!(result.line.category, EarningCategory::ExpiredVacation);
    }

    #[test]
    fn test_audit_steps_carry_step_numbers() {
        assert_eq!(
            calculate_salary_balance(dec("2400.00"), 20, 2)
                .audit_step
                .step_number,
            2
        );
        assert_eq!(
            calculate_thirteenth_salary(dec("2400.00"), 30, 3)
                .audit_step
                .step_number,
            3
        );
        assert_eq!(
            calculate_proportional_vacation(dec("2400.00"), 30, 4)
                .audit_step
                .step_number,
            4
        );
        assert_eq!(
            calculate_expired_vacation(dec("2400.00"), 1, 5)
                .audit_step
                .step_number,
            5
        );
    }
}
