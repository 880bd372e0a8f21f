//! Calculation logic for the Termination Settlement Engine.
//!
//! This module contains all the calculation functions for settling a
//! termination: service-period assessment (with the 15-day accrual rule),
//! the five gross earning lines, the progressive social-security schedule,
//! the income-tax schedule, the notice-period indemnity, the severance-fund
//! statement, and the orchestration that ties them together.

mod earnings;
mod income_tax;
mod notice_period;
mod service_period;
mod settlement;
mod severance_fund;
mod social_tax;

pub use earnings::{
    EarningResult, calculate_expired_vacation, calculate_proportional_vacation,
    calculate_salary_balance, calculate_thirteenth_salary,
};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use notice_period::{NoticePeriodResult, calculate_notice_period};
pub use service_period::{
    ServicePeriodResult, assess_service_period, full_years_of_service, fund_months,
    months_of_service,
};
pub use settlement::calculate_settlement;
pub use severance_fund::{SeveranceFundResult, calculate_severance_fund};
pub use social_tax::{SocialTaxResult, calculate_social_tax};
