//! Periodic perturbation of a record sequence.

use std::rc::Rc;

use tracing::debug;

use crate::config::{CAP_JITTER, MUTATION_INTERVAL, PRICE_JITTER};
use crate::data::RandomSource;
use crate::models::{round_cents, FinancialRecord, MutationLogEntry};


/// Result of a mutation pass.
#[derive(Debug, Clone, Default)]
pub struct MutationOutcome {
    pub modified: Vec<Rc<FinancialRecord>>,
    pub log: Vec<MutationLogEntry>,
}


/// Derive a copy of `records` with every `MUTATION_INTERVAL`th row perturbed.
///
/// Rows at zero-based indices 99, 199, ... get a new stock price within
/// +/-5 and a new market cap within +/-500 000 of the original. All other
/// rows are shared with the input, which is left untouched.
pub fn mutate(records: &[Rc<FinancialRecord>], rng: &mut dyn RandomSource) -> MutationOutcome {
    let mut modified = records.to_vec();
    let mut log = Vec::with_capacity(records.len() / MUTATION_INTERVAL);

    for index in (MUTATION_INTERVAL - 1..records.len()).step_by(MUTATION_INTERVAL) {
        let original = Rc::clone(&records[index]);

        let price_delta = rng.uniform(-PRICE_JITTER, PRICE_JITTER);
        let cap_delta = rng.uniform(-CAP_JITTER, CAP_JITTER);

        let changed = Rc::new(FinancialRecord {
            stock_price: round_cents(original.stock_price + price_delta),
            market_cap: (original.market_cap as f64 + cap_delta).round() as i64,
            ..FinancialRecord::clone(&original)
        });

        modified[index] = Rc::clone(&changed);
        log.push(MutationLogEntry {
            index,
            original,
            modified: changed,
        });
    }

    debug!(rows = records.len(), mutated = log.len(), "mutation pass complete");
    MutationOutcome { modified, log }
}
