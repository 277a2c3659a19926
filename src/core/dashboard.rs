//! Admin dashboard: raw listings plus per-day, per-employee totals.

use crate::db::TrackerStore;
use crate::errors::AppResult;
use crate::models::{Delivery, Expense, LogEntry};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Grouping key of the summary. Equality and ordering are field-wise
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SummaryKey {
    pub date: String,
    pub emp_id: String,
    pub emp_name: String,
}

impl SummaryKey {
    /// `"<date>|<emp_id>|<emp_name>"`, the key format clients read.
    pub fn joined(&self) -> String {
        format!("{}|{}|{}", self.date, self.emp_id, self.emp_name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryTotals {
    pub gas: f64,
    pub expense: f64,
}

/// Flat form of one summary entry, used by exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub date: String,
    pub emp_id: String,
    pub emp_name: String,
    pub gas: f64,
    pub expense: f64,
}

/// Totals keyed by `SummaryKey`; serializes as a JSON object whose keys
/// are the joined strings, in ascending key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary(BTreeMap<SummaryKey, SummaryTotals>);

impl Summary {
    pub fn build(deliveries: &[Delivery], expenses: &[Expense]) -> Self {
        let mut groups: BTreeMap<SummaryKey, SummaryTotals> = BTreeMap::new();

        for d in deliveries {
            let key = SummaryKey {
                date: d.date.clone(),
                emp_id: d.emp_id.clone(),
                emp_name: d.emp_name.clone(),
            };
            groups.entry(key).or_default().gas += d.gas_price;
        }

        for e in expenses {
            let key = SummaryKey {
                date: e.date.clone(),
                emp_id: e.emp_id.clone(),
                emp_name: e.emp_name.clone(),
            };
            groups.entry(key).or_default().expense += e.expense_price;
        }

        Summary(groups)
    }

    pub fn get(&self, key: &SummaryKey) -> Option<&SummaryTotals> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        self.0
            .iter()
            .map(|(k, t)| SummaryRow {
                date: k.date.clone(),
                emp_id: k.emp_id.clone(),
                emp_name: k.emp_name.clone(),
                gas: t.gas,
                expense: t.expense,
            })
            .collect()
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, totals) in &self.0 {
            map.serialize_entry(&key.joined(), totals)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub logs: Vec<LogEntry>,
    pub deliveries: Vec<Delivery>,
    pub expenses: Vec<Expense>,
    pub summary: Summary,
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn load(store: &dyn TrackerStore) -> AppResult<Dashboard> {
        let logs = store.list_logs()?;
        let deliveries = store.list_deliveries()?;
        let expenses = store.list_expenses()?;
        let summary = Summary::build(&deliveries, &expenses);

        Ok(Dashboard {
            logs,
            deliveries,
            expenses,
            summary,
        })
    }
}
