//! Dashboard state: tab selection plus the session's datasets.

use tracing::info;

use crate::charts::{bar_chart, line_chart, ChartSpec};
use crate::data::{generate, mutate, RandomSource};
use crate::models::{MutationLogEntry, SharedRecords};


/// Tabs shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Table1,
    Table2,
    Charts,
}


impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Table1, Tab::Table2, Tab::Charts]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Table1 => "Table 1",
            Tab::Table2 => "Table 2",
            Tab::Charts => "Charts",
        }
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn prev(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}


/// Everything the dashboard displays, owned for the whole session.
///
/// Child views get shared references or `Rc` clones of the datasets; only
/// the shell changes `active_tab`.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub primary: SharedRecords,
    pub modified: SharedRecords,
    pub mutation_log: Vec<MutationLogEntry>,
    pub line_chart: ChartSpec,
    pub bar_chart: ChartSpec,
}


impl DashboardState {
    /// Generate `record_count` records, mutate them once and derive both charts.
    pub fn build(record_count: usize, rng: &mut dyn RandomSource) -> Self {
        let generated = generate(record_count, rng);
        let outcome = mutate(&generated, rng);

        let line_chart = line_chart(&generated);
        let bar_chart = bar_chart(&generated);

        info!(
            records = generated.len(),
            mutated = outcome.log.len(),
            "dashboard data generated"
        );

        Self {
            active_tab: Tab::default(),
            primary: generated.into(),
            modified: outcome.modified.into(),
            mutation_log: outcome.log,
            line_chart,
            bar_chart,
        }
    }

    /// Switch tabs. Returns whether the active tab changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Dataset shown by a table tab; `None` for the charts tab.
    pub fn dataset(&self, tab: Tab) -> Option<&SharedRecords> {
        match tab {
            Tab::Table1 => Some(&self.primary),
            Tab::Table2 => Some(&self.modified),
            Tab::Charts => None,
        }
    }

    /// Row indices changed by the mutation pass, ascending.
    pub fn mutated_indices(&self) -> Vec<usize> {
        self.mutation_log.iter().map(|entry| entry.index).collect()
    }
}
