//! Property-based tests for the settlement calculations.
//!
//! These tests check the structural invariants that must hold for any
//! input: tenure counting monotonicity, tax bounds, and settlement
//! reconciliation.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use settlement_engine::calculation::{
    calculate_income_tax, calculate_settlement, calculate_social_tax, fund_months,
    months_of_service,
};
use settlement_engine::config::{ConfigLoader, TaxTables};
use settlement_engine::models::{EmploymentRecord, TerminationReason};

static TABLES: LazyLock<TaxTables> = LazyLock::new(|| {
    ConfigLoader::load("./config/clt_2024")
        .expect("Failed to load config")
        .tables()
        .clone()
});

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2010i32..=2023, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_salary() -> impl Strategy<Value = Decimal> {
    // Cents between R$500.00 and R$50000.00
    (50_000i64..=5_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn fund_months_monotone_in_termination_date(
        hire in arb_date(),
        offset_a in 45u64..3000,
        extra in 0u64..400,
    ) {
        let term_a = hire.checked_add_days(Days::new(offset_a)).unwrap();
        let term_b = term_a.checked_add_days(Days::new(extra)).unwrap();

        prop_assert!(fund_months(hire, term_a) <= fund_months(hire, term_b));
    }

    #[test]
    fn months_of_service_monotone_for_month_start_hires(
        (year, month) in (2010i32..=2023, 1u32..=12),
        offset_a in 45u64..3000,
        extra in 0u64..400,
    ) {
        // The 15-day accrual bump can retreat across a month boundary when
        // the hire day is late in the month, so strict monotonicity is only
        // guaranteed for hires on the 1st.
        let hire = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let term_a = hire.checked_add_days(Days::new(offset_a)).unwrap();
        let term_b = term_a.checked_add_days(Days::new(extra)).unwrap();

        prop_assert!(months_of_service(hire, term_a) <= months_of_service(hire, term_b));
    }

    #[test]
    fn counted_months_exceed_fund_months_by_at_most_one(
        hire in arb_date(),
        offset in 45u64..3000,
    ) {
        let term = hire.checked_add_days(Days::new(offset)).unwrap();
        let counted = months_of_service(hire, term);
        let fund = fund_months(hire, term);

        prop_assert!(counted >= fund);
        prop_assert!(counted - fund <= 1);
    }

    #[test]
    fn social_tax_bounded_by_base_and_flat_at_ceiling(base in arb_salary()) {
        let result = calculate_social_tax(base, TABLES.social_tax(), 1);

        prop_assert!(result.amount >= Decimal::ZERO);
        prop_assert!(result.amount <= base);

        if base >= TABLES.social_tax().ceiling.limit {
            prop_assert_eq!(result.amount, TABLES.social_tax().ceiling.contribution);
            prop_assert!(result.capped);
        }
    }

    #[test]
    fn income_tax_monotone_in_base(
        base_cents in 0i64..=2_000_000,
        extra_cents in 0i64..=500_000,
        dependents in 0u32..=10,
    ) {
        let base_a = Decimal::new(base_cents, 2);
        let base_b = Decimal::new(base_cents + extra_cents, 2);

        let tax_a = calculate_income_tax(base_a, dependents, TABLES.income_tax(), 1).amount;
        let tax_b = calculate_income_tax(base_b, dependents, TABLES.income_tax(), 1).amount;

        prop_assert!(tax_a >= Decimal::ZERO);
        prop_assert!(tax_a <= tax_b);
    }

    #[test]
    fn income_tax_non_increasing_in_dependents(
        base_cents in 0i64..=2_000_000,
        dependents in 0u32..10,
    ) {
        let base = Decimal::new(base_cents, 2);

        let fewer = calculate_income_tax(base, dependents, TABLES.income_tax(), 1).amount;
        let more = calculate_income_tax(base, dependents + 1, TABLES.income_tax(), 1).amount;

        prop_assert!(more <= fewer);
    }

    #[test]
    fn settlement_always_reconciles(
        salary in arb_salary(),
        hire in arb_date(),
        offset in 45u64..3000,
        without_cause in any::<bool>(),
        days_worked in 0u32..=31,
        dependents in 0u32..=10,
        expired in 0u32..=2,
    ) {
        let record = EmploymentRecord {
            base_salary: salary,
            hire_date: hire,
            termination_date: hire.checked_add_days(Days::new(offset)).unwrap(),
            reason: if without_cause {
                TerminationReason::WithoutCause
            } else {
                TerminationReason::WithCause
            },
            days_worked_final_month: days_worked,
            dependents,
            expired_vacation_periods: expired,
        };

        let result = calculate_settlement(&record, &TABLES).unwrap();

        // All five lines are always present, zero-amount ones included
        prop_assert_eq!(result.earnings.len(), 5);
        prop_assert_eq!(result.withholdings.len(), 3);

        let gross: Decimal = result.earnings.iter().map(|e| e.amount).sum();
        let withheld: Decimal = result.withholdings.iter().map(|w| w.amount).sum();

        prop_assert_eq!(result.totals.gross_earnings, gross);
        prop_assert_eq!(result.totals.total_withholdings, withheld);
        prop_assert_eq!(result.totals.net_payable, gross - withheld);

        // Severance fund stays out of the payroll totals
        prop_assert_eq!(
            result.severance_fund.total,
            result.severance_fund.deposited + result.severance_fund.penalty
        );

        // Audit steps are strictly sequential from 1
        for (i, step) in result.audit_trace.steps.iter().enumerate() {
            prop_assert_eq!(step.step_number, (i + 1) as u32);
        }
    }
}
