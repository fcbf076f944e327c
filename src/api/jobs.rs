//! Job board and intake.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Deserialize;

use crate::AppState;
use crate::domain::{AiDiagnosis, Job, JobStatus};
use crate::error::{ApiError, StoreError};
use crate::store::{JobFilter, NewJobOrder};

/// Board query. `status` is a wire name or `ALL`.
#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl JobQuery {
    fn into_filter(self) -> Result<JobFilter, StoreError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) if s.eq_ignore_ascii_case("ALL") => None,
            Some(s) => Some(s.parse::<JobStatus>().map_err(StoreError::Invalid)?),
        };
        Ok(JobFilter {
            status,
            search: self.search.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: JobStatus,
}

#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    pub complaint: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/diagnose", post(diagnose))
        .route("/{id}", get(get_job))
        .route("/{id}/status", put(update_status))
}

/// GET /api/jobs?status=&search=
async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(Json(state.store.filter_jobs(&filter)))
}

/// POST /api/jobs - Open a job for an existing customer.
async fn create_job(
    State(state): State<AppState>,
    Json(order): Json<NewJobOrder>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = state.store.open_job(order)?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs/{id}
async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(state.store.job(&id)?))
}

/// PUT /api/jobs/{id}/status
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(state.store.update_job_status(&id, req.status)?))
}

/// POST /api/jobs/diagnose - Ask the assistant about a complaint.
async fn diagnose(
    State(state): State<AppState>,
    Json(req): Json<DiagnoseRequest>,
) -> Result<Json<AiDiagnosis>, ApiError> {
    tracing::info!(complaint_len = req.complaint.len(), "Diagnosis requested");
    Ok(Json(state.ai.diagnose(&req.complaint).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_all_tab_means_no_status() {
        let filter = JobQuery {
            status: Some("ALL".to_string()),
            search: None,
        }
        .into_filter()
        .unwrap();
        assert!(filter.status.is_none());
        assert!(filter.search.is_empty());
    }

    #[test]
    fn test_query_rejects_unknown_status() {
        let err = JobQuery {
            status: Some("PARKED".to_string()),
            search: None,
        }
        .into_filter()
        .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }
}
