//! Progressive social-security (INSS) contribution calculation.
//!
//! This module applies the marginal bracket schedule to a contribution
//! base. Unlike the income-tax schedule, each bracket's rate applies only
//! to the slice of the base inside that bracket. Bases at or above the
//! schedule's top limit pay the flat ceiling contribution instead.

use rust_decimal::Decimal;

use crate::config::SocialTaxTable;
use crate::models::AuditStep;

/// The result of a social-tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SocialTaxResult {
    /// The contribution amount, floored at zero.
    pub amount: Decimal,
    /// Whether the flat ceiling contribution was applied.
    pub capped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the progressive social-security contribution on a base.
///
/// Each bracket accrues its marginal rate on the slice between the previous
/// bracket's limit and the base; brackets above the base are not applied.
/// Bases at or above the ceiling limit pay the flat ceiling contribution
/// (the value at exactly the top limit is the ceiling, not the marginal
/// accrual). The result is floored at zero.
///
/// # Arguments
///
/// * `base` - The contribution base
/// * `schedule` - The bracket schedule and ceiling to apply
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_social_tax;
/// use settlement_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/clt_2024").unwrap();
/// let result = calculate_social_tax(
///     Decimal::from_str("1600.00").unwrap(),
///     loader.tables().social_tax(),
///     1,
/// );
/// assert_eq!(result.amount, Decimal::from_str("122.8200").unwrap());
/// ```
pub fn calculate_social_tax(
    base: Decimal,
    schedule: &SocialTaxTable,
    step_number: u32,
) -> SocialTaxResult {
    let mut accrued = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in &schedule.brackets {
        if base > bracket.upper_limit {
            accrued += (bracket.upper_limit - previous_limit) * bracket.rate;
            previous_limit = bracket.upper_limit;
        } else {
            accrued += (base - previous_limit) * bracket.rate;
            break;
        }
    }

    let capped = base >= schedule.ceiling.limit;
    let amount = if capped {
        schedule.ceiling.contribution
    } else {
        accrued.max(Decimal::ZERO)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_tax".to_string(),
        rule_name: "Progressive Social Security Contribution".to_string(),
        legal_ref: schedule.legal_ref.clone(),
        input: serde_json::json!({
            "base": base.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "ceiling_applied": capped
        }),
        reasoning: if capped {
            format!(
                "Base {} at or above ceiling limit {}: flat contribution {}",
                base.normalize(),
                schedule.ceiling.limit.normalize(),
                schedule.ceiling.contribution.normalize()
            )
        } else {
            format!(
                "Marginal accrual on base {} = {}",
                base.normalize(),
                amount.normalize()
            )
        },
    };

    SocialTaxResult {
        amount,
        capped,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SocialTaxBracket, SocialTaxCeiling};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_schedule() -> SocialTaxTable {
        SocialTaxTable {
            legal_ref: "INSS 2024 monthly table".to_string(),
            brackets: vec![
                SocialTaxBracket {
                    upper_limit: dec("1412.00"),
                    rate: dec("0.075"),
                },
                SocialTaxBracket {
                    upper_limit: dec("2666.68"),
                    rate: dec("0.09"),
                },
                SocialTaxBracket {
                    upper_limit: dec("4000.03"),
                    rate: dec("0.12"),
                },
                SocialTaxBracket {
                    upper_limit: dec("7786.02"),
                    rate: dec("0.14"),
                },
            ],
            ceiling: SocialTaxCeiling {
                limit: dec("7786.02"),
                contribution: dec("908.86"),
            },
        }
    }

    /// ST-001: zero base pays zero
    #[test]
    fn test_zero_base_pays_zero() {
        let result = calculate_social_tax(Decimal::ZERO, &create_test_schedule(), 1);
        assert_eq!(result.amount, Decimal::ZERO);
        assert!(!result.capped);
    }

    /// ST-002: base inside the first bracket
    #[test]
    fn test_base_inside_first_bracket() {
        let result = calculate_social_tax(dec("1000.00"), &create_test_schedule(), 1);
        // 1000.00 * 0.075 = 75.00
        assert_eq!(result.amount, dec("75.0000"));
    }

    /// ST-003: base spanning two brackets accrues marginally
    #[test]
    fn test_base_spanning_two_brackets() {
        let result = calculate_social_tax(dec("1600.00"), &create_test_schedule(), 1);
        // 1412.00 * 0.075 + (1600.00 - 1412.00) * 0.09 = 105.90 + 16.92
        assert_eq!(result.amount, dec("122.8200"));
    }

    /// ST-004: base at exactly the top limit pays the flat ceiling
    #[test]
    fn test_base_at_top_limit_pays_ceiling() {
        let result = calculate_social_tax(dec("7786.02"), &create_test_schedule(), 1);
        assert_eq!(result.amount, dec("908.86"));
        assert!(result.capped);
    }

    /// ST-005: base above the top limit pays the flat ceiling
    #[test]
    fn test_base_above_top_limit_pays_ceiling() {
        let result = calculate_social_tax(dec("12000.00"), &create_test_schedule(), 1);
        assert_eq!(result.amount, dec("908.86"));
        assert!(result.capped);
        assert_eq!(
            result.audit_step.output["ceiling_applied"].as_bool().unwrap(),
            true
        );
    }

    /// ST-006: negative base floors at zero
    #[test]
    fn test_negative_base_floors_at_zero() {
        let result = calculate_social_tax(dec("-100.00"), &create_test_schedule(), 1);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_base_at_first_bracket_limit() {
        let result = calculate_social_tax(dec("1412.00"), &create_test_schedule(), 1);
        // Exactly the limit stays in the first bracket: 1412.00 * 0.075
        assert_eq!(result.amount, dec("105.90000"));
    }

    #[test]
    fn test_base_in_top_bracket_below_ceiling() {
        let result = calculate_social_tax(dec("5000.00"), &create_test_schedule(), 1);
        // 105.90 + 112.9212 + 160.002 + (5000.00 - 4000.03) * 0.14
        let expected = dec("1412.00") * dec("0.075")
            + (dec("2666.68") - dec("1412.00")) * dec("0.09")
            + (dec("4000.03") - dec("2666.68")) * dec("0.12")
            + (dec("5000.00") - dec("4000.03")) * dec("0.14");
        assert_eq!(result.amount, expected);
        assert!(!result.capped);
    }

    #[test]
    fn test_audit_step_records_base_and_amount() {
        let result = calculate_social_tax(dec("1600.00"), &create_test_schedule(), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "social_tax");
        assert_eq!(result.audit_step.input["base"].as_str().unwrap(), "1600");
        assert_eq!(
            result.audit_step.output["amount"].as_str().unwrap(),
            "122.82"
        );
    }
}
