use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::interview::{
        CreateInterviewRequest, DeleteConfirmation, Interview, UpdateInterviewRequest,
    },
    services::query::{InterviewPage, ListParams, ListQuery, QueryService},
    utils::errors::AppError,
    utils::logger::LOGGER,
    AppState,
};

pub async fn list_interviews(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<InterviewPage>, AppError> {
    let query = ListQuery::from_params(params)?;
    let page = QueryService::new(state.store.clone()).list(query).await?;

    LOGGER.log_request("GET", "/interviews", 200);
    Ok(Json(page))
}

pub async fn create_interview(
    State(state): State<AppState>,
    Json(payload): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<Interview>), AppError> {
    payload.validate()?;
    let new_interview = payload.into_new_interview()?;

    let interview = state.store.insert(new_interview).await?;

    Ok((StatusCode::CREATED, Json(interview)))
}

pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Interview>, AppError> {
    let interview = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Interview not found".to_string()))?;

    Ok(Json(interview))
}

pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewRequest>,
) -> Result<Json<Interview>, AppError> {
    payload.validate()?;
    payload.ensure_required_not_blank()?;

    let interview = state
        .store
        .update_by_id(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Interview not found".to_string()))?;

    Ok(Json(interview))
}

pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    let deleted = state.store.delete_by_id(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Interview not found".to_string()));
    }

    Ok(Json(DeleteConfirmation {
        message: "Interview deleted successfully".to_string(),
    }))
}
