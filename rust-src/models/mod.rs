//! Data models for financial records.

mod financial_record;

pub use financial_record::{round_cents, FinancialRecord, MutationLogEntry, SharedRecords};
