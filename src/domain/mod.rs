//! Shop records.
//!
//! Every record is a flat, serializable value. Relationships between
//! records are plain string identifiers, and list views carry a
//! denormalized snapshot (a [`Job`] stores the customer's name and a
//! one-line vehicle description) so they can be rendered without a join.
//!
//! JSON field names are camelCase and enum variants are SCREAMING_SNAKE_CASE
//! so payloads line up with the dashboard front end.

pub mod blog;
pub mod customer;
pub mod inventory;
pub mod invoice;
pub mod job;
pub mod user;

pub use blog::{BlogDraft, BlogPost};
pub use customer::{Customer, Vehicle};
pub use inventory::InventoryItem;
pub use invoice::{Invoice, InvoiceStatus, LineItem, Payment};
pub use job::{AiDiagnosis, Job, JobPart, JobStatus, Priority};
pub use user::{User, UserRole};
