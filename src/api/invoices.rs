use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::domain::{Invoice, Payment};
use crate::error::ApiError;
use crate::store::{JobInvoiceOptions, NewInvoice};

/// Payment form. The date defaults to today.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub method: String,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OverdueResponse {
    pub updated: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/mark-overdue", post(mark_overdue))
        .route("/from-job/{job_id}", post(invoice_from_job))
        .route("/{id}", get(get_invoice))
        .route("/{id}/payments", post(record_payment))
}

/// GET /api/invoices
async fn list_invoices(State(state): State<AppState>) -> Json<Vec<Invoice>> {
    Json(state.store.invoices())
}

/// POST /api/invoices
async fn create_invoice(
    State(state): State<AppState>,
    Json(req): Json<NewInvoice>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let invoice = state.store.issue_invoice(req, Utc::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// POST /api/invoices/from-job/{job_id}
async fn invoice_from_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(options): Json<JobInvoiceOptions>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let invoice = state
        .store
        .invoice_from_job(&job_id, options, Utc::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET /api/invoices/{id}
async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, ApiError> {
    Ok(Json(state.store.invoice(&id)?))
}

/// POST /api/invoices/{id}/payments
async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PaymentRequest>,
) -> Result<Json<Invoice>, ApiError> {
    let payment = Payment {
        amount: req.amount,
        date: req.date.unwrap_or_else(|| Utc::now().date_naive()),
        method: req.method,
        reference: req.reference.filter(|r| !r.trim().is_empty()),
    };
    Ok(Json(state.store.record_payment(&id, payment)?))
}

/// POST /api/invoices/mark-overdue
async fn mark_overdue(State(state): State<AppState>) -> Json<OverdueResponse> {
    let updated = state.store.mark_overdue(Utc::now().date_naive());
    Json(OverdueResponse { updated })
}
