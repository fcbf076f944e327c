use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::AppState;
use crate::domain::Customer;
use crate::error::ApiError;
use crate::store::NewCustomer;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/{id}", get(get_customer))
}

/// GET /api/customers
async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.store.customers())
}

/// POST /api/customers - The id is assigned when omitted.
async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state.store.create_customer(req)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers/{id}
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.store.customer(&id)?))
}
