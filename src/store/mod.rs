//! In-memory shop state.
//!
//! [`ShopStore`] is a cheap-to-clone handle over a single [`ShopData`]
//! value guarded by a lock. Mutators replace, append to or filter the
//! record lists; nothing is persisted and a restart starts over from the
//! seed (or from empty).
//!
//! # Example
//!
//! ```rust
//! use biskaken_shop::store::{JobFilter, ShopStore, StoreSettings};
//! use biskaken_shop::domain::JobStatus;
//!
//! let store = ShopStore::seeded(StoreSettings::default());
//! let pending = store.filter_jobs(&JobFilter::status(JobStatus::Pending));
//! assert_eq!(pending.len(), 1);
//! ```

mod seed;
pub mod views;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::mock_users;
use crate::domain::{
    AiDiagnosis, BlogDraft, BlogPost, Customer, InventoryItem, Invoice, InvoiceStatus, Job,
    JobStatus, LineItem, Payment, Priority, User, UserRole, Vehicle,
};
use crate::error::StoreError;

pub use views::{JobFilter, amount_paid, balance_due, estimated_cost_floor, is_low_stock, settles};

/// Tunables applied when the store derives new records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreSettings {
    /// Fraction of the subtotal charged as tax on new invoices.
    pub tax_rate: f64,
    /// Hourly rate for jobs opened through [`ShopStore::open_job`].
    pub default_labor_rate: f64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            tax_rate: 0.0,
            default_labor_rate: 50.0,
        }
    }
}

/// Everything the shop knows.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopData {
    pub user: Option<User>,
    pub customers: Vec<Customer>,
    pub jobs: Vec<Job>,
    pub inventory: Vec<InventoryItem>,
    pub invoices: Vec<Invoice>,
    pub blog_posts: Vec<BlogPost>,
}

/// Customer intake form. The id is assigned when omitted or blank.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub vehicle: Vehicle,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Stock entry form. The id is assigned when omitted or blank.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub reorder_level: u32,
    pub unit_cost: f64,
    pub selling_price: f64,
    #[serde(default)]
    pub supplier: Option<String>,
}

/// Request to open a job order for an existing customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobOrder {
    pub customer_id: String,
    pub issue_description: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assigned_mechanic: Option<String>,
    #[serde(default)]
    pub expected_completion: Option<String>,
    /// Diagnosis accepted in the intake dialog; seeds the cost estimate.
    #[serde(default)]
    pub diagnosis: Option<AiDiagnosis>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// Request to bill a customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    #[serde(default)]
    pub job_id: Option<String>,
    pub customer_id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub items: Vec<NewLineItem>,
    #[serde(default)]
    pub discount: f64,
}

/// Billing options when an invoice is derived from a job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInvoiceOptions {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub discount: f64,
}

/// Figures shown on the manager dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_jobs: usize,
    pub pending_jobs: usize,
    pub in_progress_jobs: usize,
    pub completed_jobs: usize,
    pub low_stock_count: usize,
    pub low_stock_items: Vec<InventoryItem>,
    pub open_invoices: usize,
    pub outstanding_balance: f64,
    pub collected_revenue: f64,
    pub recent_jobs: Vec<Job>,
}

impl DashboardSummary {
    /// Plain-language digest handed to the insights prompt.
    #[must_use]
    pub fn digest(&self) -> String {
        format!(
            "₵{:.2} collected so far, ₵{:.2} outstanding across {} open invoices. \
             {} jobs on the board: {} pending, {} in progress, {} completed. \
             {} items low on stock.",
            self.collected_revenue,
            self.outstanding_balance,
            self.open_invoices,
            self.total_jobs,
            self.pending_jobs,
            self.in_progress_jobs,
            self.completed_jobs,
            self.low_stock_count,
        )
    }
}

/// Thread-safe handle to the shop state.
#[derive(Debug, Clone)]
pub struct ShopStore {
    inner: Arc<ShopStoreInner>,
}

#[derive(Debug)]
struct ShopStoreInner {
    data: RwLock<ShopData>,
    settings: StoreSettings,
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new(StoreSettings::default())
    }
}

impl ShopStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(settings: StoreSettings) -> Self {
        Self::from_data(ShopData::default(), settings)
    }

    /// Create a store holding the demo records.
    #[must_use]
    pub fn seeded(settings: StoreSettings) -> Self {
        Self::from_data(seed::demo_data(), settings)
    }

    #[must_use]
    pub fn from_data(data: ShopData, settings: StoreSettings) -> Self {
        Self {
            inner: Arc::new(ShopStoreInner {
                data: RwLock::new(data),
                settings,
            }),
        }
    }

    #[must_use]
    pub fn settings(&self) -> StoreSettings {
        self.inner.settings
    }

    /// Copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> ShopData {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, ShopData> {
        self.inner.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ShopData> {
        self.inner.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session (mocked sign-in)
    // ─────────────────────────────────────────────────────────────────────

    /// Sign in as the mock user with this email and role, falling back to
    /// the first mock user when none matches.
    pub fn login(&self, email: &str, role: UserRole) -> User {
        let users = mock_users();
        let user = users
            .iter()
            .find(|u| u.email == email && u.role == role)
            .or_else(|| users.first())
            .cloned()
            .unwrap_or_else(|| User {
                id: "0".to_string(),
                name: "Guest".to_string(),
                email: email.to_string(),
                role,
                avatar: None,
            });

        info!(name: "session.login", user_id = %user.id, role = ?user.role, "User signed in");
        self.write().user = Some(user.clone());
        user
    }

    pub fn logout(&self) {
        self.write().user = None;
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read().user.clone()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Customers
    // ─────────────────────────────────────────────────────────────────────

    pub fn add_customer(&self, customer: Customer) -> Result<Customer, StoreError> {
        let mut data = self.write();
        if data.customers.iter().any(|c| c.id == customer.id) {
            return Err(StoreError::conflict("customer", customer.id));
        }
        data.customers.push(customer.clone());
        Ok(customer)
    }

    /// Validate an intake form and record the customer. A missing id is
    /// assigned under the same write lock as the insert.
    pub fn create_customer(&self, req: NewCustomer) -> Result<Customer, StoreError> {
        if req.name.trim().is_empty() || req.phone.trim().is_empty() {
            return Err(StoreError::Invalid("name and phone are required".to_string()));
        }
        if req.vehicle.plate_number.trim().is_empty() {
            return Err(StoreError::Invalid(
                "vehicle plate number is required".to_string(),
            ));
        }

        let mut data = self.write();
        let id = match req.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => next_id("C", data.customers.iter().map(|c| c.id.as_str()))?,
        };
        if data.customers.iter().any(|c| c.id == id) {
            return Err(StoreError::conflict("customer", id));
        }

        let customer = Customer {
            id,
            name: req.name,
            phone: req.phone,
            email: req.email,
            address: req.address,
            vehicle: req.vehicle,
            notes: req.notes,
            created_at: Utc::now(),
        };
        info!(name: "customer.created", customer_id = %customer.id, "Customer created");
        data.customers.push(customer.clone());
        Ok(customer)
    }

    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        self.read().customers.clone()
    }

    pub fn customer(&self, id: &str) -> Result<Customer, StoreError> {
        self.read()
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("customer", id))
    }

    #[must_use]
    /// The id [`create_customer`](Self::create_customer) would assign next.
    pub fn next_customer_id(&self) -> Result<String, StoreError> {
        next_id("C", self.read().customers.iter().map(|c| c.id.as_str()))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Jobs
    // ─────────────────────────────────────────────────────────────────────

    pub fn add_job(&self, job: Job) -> Result<Job, StoreError> {
        let mut data = self.write();
        if data.jobs.iter().any(|j| j.id == job.id) {
            return Err(StoreError::conflict("job", job.id));
        }
        data.jobs.push(job.clone());
        Ok(job)
    }

    /// Open a pending job for an existing customer, snapshotting the
    /// customer's name and vehicle.
    pub fn open_job(&self, order: NewJobOrder) -> Result<Job, StoreError> {
        if order.issue_description.trim().is_empty() {
            return Err(StoreError::Invalid(
                "issue description is required".to_string(),
            ));
        }

        let mut data = self.write();
        let customer = data
            .customers
            .iter()
            .find(|c| c.id == order.customer_id)
            .ok_or_else(|| StoreError::not_found("customer", order.customer_id.as_str()))?;

        #[allow(clippy::cast_precision_loss)]
        let estimated_cost = order
            .diagnosis
            .as_ref()
            .map_or(0.0, |d| estimated_cost_floor(&d.estimated_cost_range) as f64);

        let job = Job {
            id: next_id("J", data.jobs.iter().map(|j| j.id.as_str()))?,
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            vehicle_info: customer.vehicle.summary(),
            issue_description: order.issue_description,
            status: JobStatus::Pending,
            priority: order.priority.unwrap_or_default(),
            assigned_mechanic: order.assigned_mechanic,
            estimated_cost,
            parts: Vec::new(),
            labor_hours: 0.0,
            labor_rate: self.inner.settings.default_labor_rate,
            expected_completion: order.expected_completion,
            created_at: Utc::now(),
        };

        info!(name: "job.opened", job_id = %job.id, customer_id = %job.customer_id, "Job order opened");
        data.jobs.push(job.clone());
        Ok(job)
    }

    /// Replace the status of one job, leaving every other field as is.
    pub fn update_job_status(&self, id: &str, status: JobStatus) -> Result<Job, StoreError> {
        let mut data = self.write();
        let job = data
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StoreError::not_found("job", id))?;
        job.status = status;
        info!(name: "job.status.updated", job_id = %id, status = status.label(), "Job status updated");
        Ok(job.clone())
    }

    #[must_use]
    pub fn jobs(&self) -> Vec<Job> {
        self.read().jobs.clone()
    }

    pub fn job(&self, id: &str) -> Result<Job, StoreError> {
        self.read()
            .jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("job", id))
    }

    #[must_use]
    pub fn filter_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        filter.apply(&self.read().jobs).into_iter().cloned().collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Inventory
    // ─────────────────────────────────────────────────────────────────────

    pub fn add_inventory(&self, item: InventoryItem) -> Result<InventoryItem, StoreError> {
        let mut data = self.write();
        if data.inventory.iter().any(|i| i.id == item.id) {
            return Err(StoreError::conflict("inventory item", item.id));
        }
        data.inventory.push(item.clone());
        Ok(item)
    }

    /// Validate a stock entry and record it. A missing id is assigned under
    /// the same write lock as the insert.
    pub fn create_inventory_item(&self, req: NewInventoryItem) -> Result<InventoryItem, StoreError> {
        if req.name.trim().is_empty() {
            return Err(StoreError::Invalid("item name is required".to_string()));
        }
        if !(req.unit_cost >= 0.0 && req.selling_price >= 0.0) {
            return Err(StoreError::Invalid("prices cannot be negative".to_string()));
        }

        let mut data = self.write();
        let id = match req.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => next_id("I", data.inventory.iter().map(|i| i.id.as_str()))?,
        };
        if data.inventory.iter().any(|i| i.id == id) {
            return Err(StoreError::conflict("inventory item", id));
        }

        let item = InventoryItem {
            id,
            name: req.name,
            category: req.category,
            stock: req.stock,
            reorder_level: req.reorder_level,
            unit_cost: req.unit_cost,
            selling_price: req.selling_price,
            supplier: req.supplier,
        };
        data.inventory.push(item.clone());
        Ok(item)
    }

    pub fn update_inventory_stock(
        &self,
        id: &str,
        new_stock: u32,
    ) -> Result<InventoryItem, StoreError> {
        let mut data = self.write();
        let item = data
            .inventory
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("inventory item", id))?;
        item.stock = new_stock;
        if is_low_stock(item) {
            tracing::warn!(name: "inventory.low_stock", item_id = %id, stock = new_stock, reorder_level = item.reorder_level, "Item below reorder level");
        }
        Ok(item.clone())
    }

    #[must_use]
    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.read().inventory.clone()
    }

    pub fn inventory_item(&self, id: &str) -> Result<InventoryItem, StoreError> {
        self.read()
            .inventory
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("inventory item", id))
    }

    /// Items whose stock is below their reorder level.
    #[must_use]
    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.read()
            .inventory
            .iter()
            .filter(|i| is_low_stock(i))
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Invoices
    // ─────────────────────────────────────────────────────────────────────

    pub fn add_invoice(&self, invoice: Invoice) -> Result<Invoice, StoreError> {
        let mut data = self.write();
        if data.invoices.iter().any(|i| i.id == invoice.id) {
            return Err(StoreError::conflict("invoice", invoice.id));
        }
        data.invoices.push(invoice.clone());
        Ok(invoice)
    }

    /// Price the line items and record an unpaid invoice.
    pub fn issue_invoice(&self, req: NewInvoice, today: NaiveDate) -> Result<Invoice, StoreError> {
        validate_bill(&req.items, req.discount)?;
        let mut data = self.write();
        let customer_name = data
            .customers
            .iter()
            .find(|c| c.id == req.customer_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| StoreError::not_found("customer", req.customer_id.as_str()))?;

        let items = req
            .items
            .into_iter()
            .map(|i| LineItem::new(i.description, i.quantity, i.unit_price))
            .collect();

        let invoice = price_invoice(
            next_id("INV", data.invoices.iter().map(|i| i.id.as_str()))?,
            req.job_id,
            req.customer_id,
            customer_name,
            req.date.unwrap_or(today),
            req.due_date,
            items,
            req.discount,
            self.inner.settings.tax_rate,
        );

        info!(name: "invoice.issued", invoice_id = %invoice.id, grand_total = invoice.grand_total, "Invoice issued");
        data.invoices.push(invoice.clone());
        Ok(invoice)
    }

    /// Bill a job: one line per part plus a labor line when hours were booked.
    pub fn invoice_from_job(
        &self,
        job_id: &str,
        options: JobInvoiceOptions,
        today: NaiveDate,
    ) -> Result<Invoice, StoreError> {
        let job = self.job(job_id)?;

        let mut items: Vec<NewLineItem> = job
            .parts
            .iter()
            .map(|p| NewLineItem {
                description: p.name.clone(),
                quantity: f64::from(p.quantity),
                unit_price: p.price,
            })
            .collect();
        if job.labor_cost() > 0.0 {
            items.push(NewLineItem {
                description: format!("Labor ({} h)", job.labor_hours),
                quantity: job.labor_hours,
                unit_price: job.labor_rate,
            });
        }

        self.issue_invoice(
            NewInvoice {
                job_id: Some(job.id),
                customer_id: job.customer_id,
                date: options.date,
                due_date: options.due_date,
                items,
                discount: options.discount,
            },
            today,
        )
    }

    /// Append a payment. The invoice becomes PAID once cumulative payments
    /// meet or exceed the grand total; otherwise its status is unchanged.
    pub fn record_payment(&self, id: &str, payment: Payment) -> Result<Invoice, StoreError> {
        if !payment.amount.is_finite() || payment.amount <= 0.0 {
            return Err(StoreError::Invalid(
                "payment amount must be a positive number".to_string(),
            ));
        }

        let mut data = self.write();
        let invoice = data
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("invoice", id))?;

        invoice.payments.push(payment);
        metrics::counter!("shop_payments_recorded_total").increment(1);

        if settles(invoice) {
            if invoice.status != InvoiceStatus::Paid {
                info!(name: "invoice.paid", invoice_id = %id, "Invoice settled");
            }
            invoice.status = InvoiceStatus::Paid;
        }
        Ok(invoice.clone())
    }

    /// Flag unpaid invoices whose due date is before `today`.
    ///
    /// Returns how many invoices changed.
    pub fn mark_overdue(&self, today: NaiveDate) -> usize {
        let mut data = self.write();
        let mut changed = 0;
        for invoice in &mut data.invoices {
            if invoice.status == InvoiceStatus::Unpaid
                && invoice.due_date.is_some_and(|due| due < today)
            {
                invoice.status = InvoiceStatus::Overdue;
                changed += 1;
            }
        }
        changed
    }

    #[must_use]
    pub fn invoices(&self) -> Vec<Invoice> {
        self.read().invoices.clone()
    }

    pub fn invoice(&self, id: &str) -> Result<Invoice, StoreError> {
        self.read()
            .invoices
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("invoice", id))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Blog
    // ─────────────────────────────────────────────────────────────────────

    /// Newest posts come first.
    pub fn add_blog_post(&self, post: BlogPost) -> Result<BlogPost, StoreError> {
        let mut data = self.write();
        if data.blog_posts.iter().any(|p| p.id == post.id) {
            return Err(StoreError::conflict("blog post", post.id));
        }
        data.blog_posts.insert(0, post.clone());
        Ok(post)
    }

    pub fn delete_blog_post(&self, id: &str) -> Result<(), StoreError> {
        let mut data = self.write();
        let before = data.blog_posts.len();
        data.blog_posts.retain(|p| p.id != id);
        if data.blog_posts.len() == before {
            return Err(StoreError::not_found("blog post", id));
        }
        Ok(())
    }

    #[must_use]
    pub fn blog_posts(&self) -> Vec<BlogPost> {
        self.read().blog_posts.clone()
    }

    /// Turn a finished draft into a post. Title, content and image are required.
    pub fn publish_draft(&self, draft: BlogDraft, today: NaiveDate) -> Result<BlogPost, StoreError> {
        let image = draft.image.filter(|i| !i.trim().is_empty());
        let (Some(image), false, false) = (
            image,
            draft.title.trim().is_empty(),
            draft.content.trim().is_empty(),
        ) else {
            return Err(StoreError::Invalid(
                "title, content, and image are required".to_string(),
            ));
        };

        let post = BlogPost {
            id: Uuid::new_v4().simple().to_string()[..9].to_string(),
            title: draft.title,
            content: draft.content,
            image,
            category: non_empty_or(draft.category, "General"),
            date: draft
                .date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| display_date(today)),
            read_time: non_empty_or(draft.read_time, "3 min read"),
            image_prompt: draft.image_prompt,
        };

        info!(name: "blog.published", post_id = %post.id, "Blog post published");
        self.add_blog_post(post)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let data = self.read();
        let count = |status: JobStatus| data.jobs.iter().filter(|j| j.status == status).count();

        let low_stock_items: Vec<InventoryItem> = data
            .inventory
            .iter()
            .filter(|i| is_low_stock(i))
            .cloned()
            .collect();

        let open: Vec<&Invoice> = data
            .invoices
            .iter()
            .filter(|i| i.status != InvoiceStatus::Paid)
            .collect();

        DashboardSummary {
            total_jobs: data.jobs.len(),
            pending_jobs: count(JobStatus::Pending),
            in_progress_jobs: count(JobStatus::InProgress),
            completed_jobs: count(JobStatus::Completed),
            low_stock_count: low_stock_items.len(),
            low_stock_items,
            open_invoices: open.len(),
            outstanding_balance: open.iter().map(|i| balance_due(i)).sum(),
            collected_revenue: data.invoices.iter().map(amount_paid).sum(),
            recent_jobs: data.jobs.iter().rev().take(5).cloned().collect(),
        }
    }
}

/// Next id in a `PREFIX###` sequence, one past the highest numeric suffix.
///
/// Fails once a caller-chosen id has used up the numeric range.
fn next_id<'a>(
    prefix: &str,
    existing: impl Iterator<Item = &'a str>,
) -> Result<String, StoreError> {
    let highest = existing
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let next = highest
        .checked_add(1)
        .ok_or_else(|| StoreError::Invalid(format!("no '{prefix}' ids left to assign")))?;
    Ok(format!("{prefix}{next:03}"))
}

fn validate_bill(items: &[NewLineItem], discount: f64) -> Result<(), StoreError> {
    if items.is_empty() {
        return Err(StoreError::Invalid(
            "an invoice needs at least one line item".to_string(),
        ));
    }
    let bad_item = items.iter().any(|i| {
        !i.quantity.is_finite() || !i.unit_price.is_finite() || i.quantity < 0.0 || i.unit_price < 0.0
    });
    if bad_item {
        return Err(StoreError::Invalid(
            "line item quantity and unit price must be non-negative".to_string(),
        ));
    }
    if !discount.is_finite() || discount < 0.0 {
        return Err(StoreError::Invalid(
            "discount must be non-negative".to_string(),
        ));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn price_invoice(
    id: String,
    job_id: Option<String>,
    customer_id: String,
    customer_name: String,
    date: NaiveDate,
    due_date: Option<NaiveDate>,
    items: Vec<LineItem>,
    discount: f64,
    tax_rate: f64,
) -> Invoice {
    let subtotal: f64 = items.iter().map(|i| i.total).sum();
    let tax = subtotal * tax_rate;
    let grand_total = (subtotal + tax - discount).max(0.0);
    Invoice {
        id,
        job_id,
        customer_id,
        customer_name,
        date,
        due_date,
        items,
        subtotal,
        tax,
        discount,
        grand_total,
        status: InvoiceStatus::Unpaid,
        payments: Vec::new(),
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// `May 22, 2024`
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
