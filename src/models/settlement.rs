//! Settlement result models for the Termination Settlement Engine.
//!
//! This module contains the [`SettlementResult`] type and its associated
//! structures that capture all outputs from a settlement calculation,
//! including earning lines, withholdings, totals, the severance-fund
//! statement and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the category of a gross earning line.
///
/// # Example
///
/// ```
/// use settlement_engine::models::EarningCategory;
///
/// let category = EarningCategory::SalaryBalance;
/// assert_eq!(format!("{:?}", category), "SalaryBalance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningCategory {
    /// Pay owed for days actually worked in the final partial month.
    SalaryBalance,
    /// Fractional 13th-month bonus accrued per month of service.
    ThirteenthSalary,
    /// Proportional vacation pay plus its one-third statutory bonus.
    ProportionalVacation,
    /// Expired (unused) vacation entitlement plus its one-third bonus.
    ExpiredVacation,
    /// Payment in lieu of working the notice period.
    NoticeIndemnity,
}

/// Represents a single gross earning line in a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The category of the earning.
    pub category: EarningCategory,
    /// Human-readable description of the line.
    pub description: String,
    /// The gross amount owed for this line.
    pub amount: Decimal,
    /// Reference to the legal rule that justifies this line.
    pub legal_ref: String,
}

/// Represents the category of a tax withholding line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithholdingCategory {
    /// Progressive social-security contribution (INSS) on the salary balance.
    SocialSecurity,
    /// Income tax (IRRF) withheld on the salary balance.
    IncomeTaxSalary,
    /// Exclusive income tax withheld on the 13th-month bonus.
    IncomeTaxThirteenth,
}

/// Represents a single tax withholding line in a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingLine {
    /// The category of the withholding.
    pub category: WithholdingCategory,
    /// Human-readable description of the line.
    pub description: String,
    /// The base amount the tax was computed on.
    pub base: Decimal,
    /// The amount withheld.
    pub amount: Decimal,
    /// Reference to the legal rule that justifies this withholding.
    pub legal_ref: String,
}

/// Aggregated totals for a settlement calculation.
///
/// # Example
///
/// ```
/// use settlement_engine::models::SettlementTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = SettlementTotals {
///     gross_earnings: Decimal::from_str("18480.00").unwrap(),
///     total_withholdings: Decimal::from_str("1354.46").unwrap(),
///     net_payable: Decimal::from_str("17125.54").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTotals {
    /// The sum of all earning lines.
    pub gross_earnings: Decimal,
    /// The sum of all withholding lines.
    pub total_withholdings: Decimal,
    /// Gross earnings minus total withholdings.
    pub net_payable: Decimal,
}

/// The severance-fund (FGTS) statement for the termination.
///
/// The fund payout is a separate account withdrawal; it is reported
/// alongside the settlement but never included in the net payable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceFundStatement {
    /// Whole months of service counted for fund accrual.
    pub months_counted: u32,
    /// Total employer deposits accrued over the employment.
    pub deposited: Decimal,
    /// The termination penalty on the deposited balance.
    pub penalty: Decimal,
    /// Deposited balance plus penalty.
    pub total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal rule or table this step applied.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate notable rule applications that don't prevent
/// calculation but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
///
/// # Example
///
/// ```
/// use settlement_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a settlement calculation.
///
/// Captures all outputs from the engine: every earning line, every
/// withholding, totals, the severance-fund statement, and a complete
/// audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Whole months of service, including the 15-day accrual rule.
    pub months_of_service: u32,
    /// Notice-period days owed (0 for with-cause terminations).
    pub notice_days: u32,
    /// Individual gross earning lines making up the settlement.
    pub earnings: Vec<EarningLine>,
    /// Tax withholding lines deducted from the gross.
    pub withholdings: Vec<WithholdingLine>,
    /// Aggregated totals for the settlement.
    pub totals: SettlementTotals,
    /// The severance-fund statement, reported separately from the net.
    pub severance_fund: SeveranceFundStatement,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
