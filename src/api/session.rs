//! Mocked sign-in.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::domain::{User, UserRole};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// POST /api/session/login
async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Json<User> {
    Json(state.store.login(&req.email, req.role))
}

/// POST /api/session/logout
async fn logout(State(state): State<AppState>) -> StatusCode {
    state.store.logout();
    StatusCode::NO_CONTENT
}

/// GET /api/session
async fn current_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: state.store.current_user(),
    })
}
