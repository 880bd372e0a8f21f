//! Full settlement orchestration.
//!
//! This module ties the individual calculations together into the complete
//! settlement: the five gross earning lines, the three tax withholdings,
//! totals, the severance-fund statement and the audit trace. It is a pure
//! function over the employment record and the loaded tables; the only
//! failure mode is the date-range rejection.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EmploymentRecord, SettlementResult, SettlementTotals,
    WithholdingCategory, WithholdingLine,
};

use super::earnings::{
    calculate_expired_vacation, calculate_proportional_vacation, calculate_salary_balance,
    calculate_thirteenth_salary,
};
use super::income_tax::calculate_income_tax;
use super::notice_period::calculate_notice_period;
use super::service_period::assess_service_period;
use super::severance_fund::calculate_severance_fund;
use super::social_tax::calculate_social_tax;

/// Calculates the complete termination settlement.
///
/// The pipeline:
/// 1. Rejects the record when the service-period assessment yields zero
///    counted months (`InvalidDateRange`).
/// 2. Builds the five gross earning lines (salary balance, proportional
///    13th, proportional vacation + 1/3, expired vacation + 1/3, notice
///    indemnity). Zero-amount lines are kept.
/// 3. Withholds social tax on the salary-balance base only; vacation and
///    notice amounts are tax-exempt in this model.
/// 4. Withholds salary income tax on (salary balance - social tax), with
///    the dependents deduction.
/// 5. Withholds the exclusive 13th-month income tax on (13th - its own
///    social tax), without the dependents deduction.
/// 6. Totals: gross is the exact sum of the five lines; net is gross
///    minus the three withholdings.
/// 7. Reports the severance-fund statement separately from the net.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] when the termination date
/// does not strictly follow the hire date (or the tenure is too short to
/// count a single month).
///
/// # Examples
///
/// ```no_run
/// use settlement_engine::calculation::calculate_settlement;
/// use settlement_engine::config::ConfigLoader;
/// use settlement_engine::models::{EmploymentRecord, TerminationReason};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/clt_2024")?;
/// let record = EmploymentRecord {
///     base_salary: Decimal::new(240000, 2),
///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
///     reason: TerminationReason::WithoutCause,
///     days_worked_final_month: 20,
///     dependents: 0,
///     expired_vacation_periods: 0,
/// };
/// let result = calculate_settlement(&record, loader.tables())?;
/// assert_eq!(result.months_of_service, 30);
/// # Ok::<(), settlement_engine::error::EngineError>(())
/// ```
pub fn calculate_settlement(
    record: &EmploymentRecord,
    tables: &TaxTables,
) -> EngineResult<SettlementResult> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Service period first: everything else depends on it, and an invalid
    // range must be rejected before any line item exists.
    let service = assess_service_period(record.hire_date, record.termination_date, step_number);
    audit_steps.push(service.audit_step.clone());
    step_number += 1;

    if service.counted_months == 0 {
        return Err(EngineError::InvalidDateRange {
            hire_date: record.hire_date,
            termination_date: record.termination_date,
        });
    }

    // Gross earning lines.
    let salary_balance = calculate_salary_balance(
        record.base_salary,
        record.days_worked_final_month,
        step_number,
    );
    audit_steps.push(salary_balance.audit_step);
    step_number += 1;

    let thirteenth = calculate_thirteenth_salary(
        record.base_salary,
        service.counted_months,
        step_number,
    );
    audit_steps.push(thirteenth.audit_step);
    step_number += 1;

    let vacation = calculate_proportional_vacation(
        record.base_salary,
        service.counted_months,
        step_number,
    );
    audit_steps.push(vacation.audit_step);
    step_number += 1;

    let expired = calculate_expired_vacation(
        record.base_salary,
        record.expired_vacation_periods,
        step_number,
    );
    audit_steps.push(expired.audit_step);
    step_number += 1;

    let notice = calculate_notice_period(
        record.base_salary,
        service.full_years,
        record.reason,
        tables.notice(),
        step_number,
    );
    let notice_line = notice.value_line();
    audit_steps.push(notice.audit_step);
    step_number += 1;

    if notice.capped {
        warnings.push(AuditWarning {
            code: "NOTICE_CAPPED".to_string(),
            message: format!(
                "Notice period capped at {} days for {} years of service",
                tables.notice().max_days,
                service.full_years
            ),
            severity: "low".to_string(),
        });
    }

    // Withholdings. The social-tax base is the salary balance only.
    let social = calculate_social_tax(
        salary_balance.line.amount,
        tables.social_tax(),
        step_number,
    );
    audit_steps.push(social.audit_step);
    step_number += 1;

    if social.capped {
        warnings.push(AuditWarning {
            code: "CONTRIBUTION_CEILING".to_string(),
            message: "Social contribution hit the ceiling on the salary balance".to_string(),
            severity: "low".to_string(),
        });
    }

    let salary_tax_base = salary_balance.line.amount - social.amount;
    let salary_income_tax = calculate_income_tax(
        salary_tax_base,
        record.dependents,
        tables.income_tax(),
        step_number,
    );
    audit_steps.push(salary_income_tax.audit_step);
    step_number += 1;

    // The 13th is taxed as separate exclusive-source income: its own
    // social-tax deduction first, no dependents on this base. The 13th's
    // social tax only shapes the base; it is not itself withheld here.
    let thirteenth_social = calculate_social_tax(
        thirteenth.line.amount,
        tables.social_tax(),
        step_number,
    );
    audit_steps.push(thirteenth_social.audit_step);
    step_number += 1;

    let thirteenth_tax_base = thirteenth.line.amount - thirteenth_social.amount;
    let thirteenth_income_tax =
        calculate_income_tax(thirteenth_tax_base, 0, tables.income_tax(), step_number);
    audit_steps.push(thirteenth_income_tax.audit_step);
    step_number += 1;

    // Severance fund, reported separately from the payroll settlement.
    let fund = calculate_severance_fund(
        record.base_salary,
        service.fund_months,
        tables.severance_fund(),
        step_number,
    );
    audit_steps.push(fund.audit_step);

    let withholdings = vec![
        WithholdingLine {
            category: WithholdingCategory::SocialSecurity,
            description: "Social security on salary balance".to_string(),
            base: salary_balance.line.amount,
            amount: social.amount,
            legal_ref: tables.social_tax().legal_ref.clone(),
        },
        WithholdingLine {
            category: WithholdingCategory::IncomeTaxSalary,
            description: "Income tax on salary balance".to_string(),
            base: salary_tax_base,
            amount: salary_income_tax.amount,
            legal_ref: tables.income_tax().legal_ref.clone(),
        },
        WithholdingLine {
            category: WithholdingCategory::IncomeTaxThirteenth,
            description: "Exclusive income tax on 13th salary".to_string(),
            base: thirteenth_tax_base,
            amount: thirteenth_income_tax.amount,
            legal_ref: tables.income_tax().legal_ref.clone(),
        },
    ];

    let earnings = vec![
        salary_balance.line,
        thirteenth.line,
        vacation.line,
        expired.line,
        notice_line,
    ];

    let gross_earnings: Decimal = earnings.iter().map(|e| e.amount).sum();
    let total_withholdings: Decimal = withholdings.iter().map(|w| w.amount).sum();
    let net_payable = gross_earnings - total_withholdings;

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(SettlementResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        months_of_service: service.counted_months,
        notice_days: notice.days,
        earnings,
        withholdings,
        totals: SettlementTotals {
            gross_earnings,
            total_withholdings,
            net_payable,
        },
        severance_fund: fund.statement,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}
