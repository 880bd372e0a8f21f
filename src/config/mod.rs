//! Configuration for the Termination Settlement Engine.
//!
//! Tax schedules and settlement rules are data, not code: they are loaded
//! from YAML files so a new table year can be shipped without recompiling.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    IncomeTaxBracket, IncomeTaxRate, IncomeTaxTable, NoticeRule, SettlementRules,
    SeveranceFundRates, SocialTaxBracket, SocialTaxCeiling, SocialTaxTable, TableMetadata,
    TaxTables,
};
