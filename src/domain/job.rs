use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a job order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Human readable label shown on status badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    /// Accepts the wire names in any case, e.g. `in_progress`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A part reserved against a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPart {
    /// Inventory item id the part was drawn from.
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A repair work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub customer_id: String,
    /// Snapshot of the customer's name at creation time.
    pub customer_name: String,
    /// Snapshot of [`Vehicle::summary`](super::Vehicle::summary) at creation time.
    pub vehicle_info: String,
    pub issue_description: String,
    pub status: JobStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_mechanic: Option<String>,
    pub estimated_cost: f64,
    #[serde(default)]
    pub parts: Vec<JobPart>,
    pub labor_hours: f64,
    pub labor_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_completion: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Cost of labor booked on the job.
    #[must_use]
    pub fn labor_cost(&self) -> f64 {
        self.labor_hours * self.labor_rate
    }
}

/// Structured answer of the diagnosis assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDiagnosis {
    pub diagnosis: String,
    /// Between 0 and 1.
    pub confidence: f64,
    /// Free text, e.g. `"₵400 - ₵600"`.
    pub estimated_cost_range: String,
    pub suggested_parts: Vec<String>,
    pub repair_time: String,
}
