//! Pure derived views over store records.

use serde::Deserialize;

use crate::domain::{InventoryItem, Invoice, Job, JobStatus};

/// Status tab plus free-text search over the job board.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    /// `None` is the "ALL" tab.
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub search: String,
}

impl JobFilter {
    #[must_use]
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            search: String::new(),
        }
    }

    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            status: None,
            search: term.into(),
        }
    }

    /// A job matches when its status equals the selected tab (if any) and
    /// the search term occurs, case-insensitively, in the customer name or
    /// the vehicle description.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let status_ok = self.status.is_none_or(|s| s == job.status);
        if !status_ok {
            return false;
        }
        let term = self.search.to_lowercase();
        job.customer_name.to_lowercase().contains(&term)
            || job.vehicle_info.to_lowercase().contains(&term)
    }

    /// Jobs matching the filter, in board order.
    #[must_use]
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|j| self.matches(j)).collect()
    }
}

/// Stock has fallen strictly below the reorder level.
#[must_use]
pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.stock < item.reorder_level
}

/// Sum of all recorded payments.
#[must_use]
pub fn amount_paid(invoice: &Invoice) -> f64 {
    invoice.payments.iter().map(|p| p.amount).sum()
}

/// What is still owed; never negative.
#[must_use]
pub fn balance_due(invoice: &Invoice) -> f64 {
    (invoice.grand_total - amount_paid(invoice)).max(0.0)
}

/// Cumulative payments meet or exceed the grand total.
#[must_use]
pub fn settles(invoice: &Invoice) -> bool {
    amount_paid(invoice) >= invoice.grand_total
}

/// Lower bound of a cost range such as `"₵400 - ₵600"`.
///
/// Takes the text before the first `-`, keeps its ASCII digits and parses
/// them. Returns 0 when no digits are present.
#[must_use]
pub fn estimated_cost_floor(range: &str) -> u64 {
    let head = range.split('-').next().unwrap_or_default();
    let digits: String = head.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
