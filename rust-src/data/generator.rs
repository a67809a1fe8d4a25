//! Synthetic financial record generation.

use std::rc::Rc;

use chrono::Days;
use tracing::debug;

use crate::config::{epoch, MAX_MARKET_CAP, MAX_STOCK_PRICE};
use crate::data::RandomSource;
use crate::models::{round_cents, FinancialRecord};


/// Generate `count` records with sequential names, tickers and dates.
///
/// Each record draws its stock price first and then its market cap.
pub fn generate(count: usize, rng: &mut dyn RandomSource) -> Vec<Rc<FinancialRecord>> {
    let start = epoch();

    let records: Vec<Rc<FinancialRecord>> = (0..count)
        .map(|i| {
            let number = i + 1;
            Rc::new(FinancialRecord {
                company_name: format!("Company {number}"),
                ticker: format!("TKR{number}"),
                cob_date: start + Days::new(i as u64),
                stock_price: round_cents(rng.uniform(0.0, MAX_STOCK_PRICE)),
                market_cap: rng.uniform(0.0, MAX_MARKET_CAP).round() as i64,
            })
        })
        .collect();

    debug!(count = records.len(), "generated records");
    records
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::data::{source_from_seed, ScriptedSource};

    #[test]
    fn test_generate_exact_values() {
        let mut rng = ScriptedSource::new(vec![0.5, 0.25, 0.123456, 0.9999999]);
        let records = generate(2, &mut rng);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].company_name, "Company 1");
        assert_eq!(records[0].ticker, "TKR1");
        assert_eq!(records[0].date_key(), "2023-01-01");
        assert_eq!(records[0].stock_price, 500.0);
        assert_eq!(records[0].market_cap, 250_000_000);

        assert_eq!(records[1].company_name, "Company 2");
        assert_eq!(records[1].date_key(), "2023-01-02");
        assert_eq!(records[1].price_display(), "123.46");
        assert_eq!(records[1].market_cap, 999_999_900);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let mut rng = source_from_seed(Some(1));
        assert!(generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_generate_shape_invariants() {
        let mut rng = source_from_seed(Some(7));
        let records = generate(1000, &mut rng);
        assert_eq!(records.len(), 1000);

        for pair in records.windows(2) {
            assert!(pair[0].cob_date < pair[1].cob_date);
            assert_eq!((pair[1].cob_date - pair[0].cob_date).num_days(), 1);
        }

        let tickers: HashSet<&str> = records.iter().map(|r| r.ticker.as_str()).collect();
        let names: HashSet<&str> = records.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(tickers.len(), 1000);
        assert_eq!(names.len(), 1000);
        assert_eq!(records[999].ticker, "TKR1000");
        assert_eq!(records[999].date_key(), "2025-09-26");
    }

    #[test]
    fn test_generate_value_ranges() {
        let mut rng = source_from_seed(Some(99));
        for record in generate(500, &mut rng) {
            assert!((0.0..=1000.0).contains(&record.stock_price));
            assert!((0..=1_000_000_000).contains(&record.market_cap));
        }
    }
}
