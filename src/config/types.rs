//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the loaded table set.
///
/// Identifies which year's tax schedules and settlement rules are in use.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// Short identifier for the table set (e.g., "clt_2024").
    pub code: String,
    /// The human-readable name of the table set.
    pub name: String,
    /// The version or reference year of the tables.
    pub version: String,
    /// A note on where the table values were taken from.
    pub source_note: String,
}

/// One bracket of the progressive social-security (INSS) schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialTaxBracket {
    /// The upper limit of this bracket.
    pub upper_limit: Decimal,
    /// The marginal rate applied to the slice inside this bracket.
    pub rate: Decimal,
}

/// The contribution ceiling of the social-security schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialTaxCeiling {
    /// Bases at or above this limit pay the flat ceiling contribution.
    pub limit: Decimal,
    /// The flat contribution charged at the ceiling.
    pub contribution: Decimal,
}

/// The progressive social-security (INSS) schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialTaxTable {
    /// Reference to the legal source of this schedule.
    pub legal_ref: String,
    /// Brackets in ascending order of upper limit.
    pub brackets: Vec<SocialTaxBracket>,
    /// The contribution ceiling.
    pub ceiling: SocialTaxCeiling,
}

/// One bracket of the income-tax (IRRF) schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxBracket {
    /// The upper limit of this bracket.
    pub upper_limit: Decimal,
    /// The flat rate applied to the whole adjusted base.
    pub rate: Decimal,
    /// The fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

/// The rate and deduction applied above the last income-tax bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxRate {
    /// The flat rate applied to the whole adjusted base.
    pub rate: Decimal,
    /// The fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

/// The income-tax (IRRF) schedule.
///
/// Unlike the social-security schedule, this one is NOT marginal: a single
/// bracket is selected (first ascending match) and its rate applies to the
/// whole dependent-adjusted base.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxTable {
    /// Reference to the legal source of this schedule.
    pub legal_ref: String,
    /// Fixed deduction subtracted from the base per dependent.
    pub dependent_deduction: Decimal,
    /// Brackets in ascending order of upper limit.
    pub brackets: Vec<IncomeTaxBracket>,
    /// Rate and deduction for bases above the last bracket's limit.
    pub top: IncomeTaxRate,
}

/// Severance-fund (FGTS) accrual and penalty rates.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveranceFundRates {
    /// Reference to the legal source of these rates.
    pub legal_ref: String,
    /// Fraction of the monthly salary deposited each month.
    pub monthly_rate: Decimal,
    /// Fraction of the deposited balance paid as termination penalty.
    pub penalty_rate: Decimal,
}

/// Notice-period rule parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeRule {
    /// Reference to the legal source of this rule.
    pub legal_ref: String,
    /// Notice days owed regardless of tenure.
    pub base_days: u32,
    /// Extra notice days per whole year of service.
    pub days_per_year: u32,
    /// Maximum notice days regardless of tenure.
    pub max_days: u32,
}

/// Settlement rules configuration from settlement.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementRules {
    /// Severance-fund rates.
    pub severance_fund: SeveranceFundRates,
    /// Notice-period rule.
    pub notice: NoticeRule,
}

/// The complete set of tables loaded from a configuration directory.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a table-set directory.
#[derive(Debug, Clone)]
pub struct TaxTables {
    metadata: TableMetadata,
    social_tax: SocialTaxTable,
    income_tax: IncomeTaxTable,
    settlement: SettlementRules,
}

impl TaxTables {
    /// Creates a new TaxTables from its component parts.
    ///
    /// Social-tax and income-tax brackets are sorted by ascending upper
    /// limit so the calculation modules can rely on the ordering.
    pub fn new(
        metadata: TableMetadata,
        social_tax: SocialTaxTable,
        income_tax: IncomeTaxTable,
        settlement: SettlementRules,
    ) -> Self {
        let mut social_tax = social_tax;
        social_tax
            .brackets
            .sort_by(|a, b| a.upper_limit.cmp(&b.upper_limit));

        let mut income_tax = income_tax;
        income_tax
            .brackets
            .sort_by(|a, b| a.upper_limit.cmp(&b.upper_limit));

        Self {
            metadata,
            social_tax,
            income_tax,
            settlement,
        }
    }

    /// Returns the table-set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the social-security schedule.
    pub fn social_tax(&self) -> &SocialTaxTable {
        &self.social_tax
    }

    /// Returns the income-tax schedule.
    pub fn income_tax(&self) -> &IncomeTaxTable {
        &self.income_tax
    }

    /// Returns the severance-fund rates.
    pub fn severance_fund(&self) -> &SeveranceFundRates {
        &self.settlement.severance_fund
    }

    /// Returns the notice-period rule.
    pub fn notice(&self) -> &NoticeRule {
        &self.settlement.notice
    }
}
