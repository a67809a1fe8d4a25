//! Financial record models shared by the tables, charts and dump output.

use std::rc::Rc;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};


/// Records are immutable once built, so sequences share them by `Rc`.
pub type SharedRecords = Rc<[Rc<FinancialRecord>]>;


/// One synthetic financial data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub company_name: String,
    pub ticker: String,
    pub cob_date: NaiveDate,
    #[serde(serialize_with = "serialize_price")]
    pub stock_price: f64,
    #[serde(serialize_with = "serialize_market_cap")]
    pub market_cap: i64,
}


impl FinancialRecord {
    /// Close-of-business date in YYYY-MM-DD format.
    pub fn date_key(&self) -> String {
        self.cob_date.format("%Y-%m-%d").to_string()
    }

    /// Stock price with exactly two fraction digits.
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.stock_price)
    }

    /// Market cap as a plain integer string.
    pub fn market_cap_display(&self) -> String {
        self.market_cap.to_string()
    }
}


/// Before/after pair for a row perturbed by the mutation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationLogEntry {
    pub index: usize,
    pub original: Rc<FinancialRecord>,
    pub modified: Rc<FinancialRecord>,
}


/// Round to cents, matching the two-digit display form.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{price:.2}"))
}


fn serialize_market_cap<S: Serializer>(cap: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(cap)
}
