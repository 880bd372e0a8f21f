//! Core data models for the Termination Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employment;
mod settlement;

pub use employment::{EmploymentRecord, TerminationReason};
pub use settlement::{
    AuditStep, AuditTrace, AuditWarning, EarningCategory, EarningLine, SettlementResult,
    SettlementTotals, SeveranceFundStatement, WithholdingCategory, WithholdingLine,
};
