use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    db::{aggregate::get_or_create_aggregate, organization::list_organizations_by_type},
    errors::AppError,
    models::Organization,
    ratings::{DEFAULT_SCORE_THRESHOLD, combine_average, resolve_dimensions, retain_above},
    state::AppState,
};

#[derive(Deserialize)]
pub struct AverageRequest {
    pub organization_id: u64,
    pub params: Vec<String>,
}

#[derive(Serialize)]
pub struct AverageResponse {
    pub organization_id: u64,
    pub params: Vec<String>,
    pub average: f64,
}

#[derive(Serialize)]
pub struct AverageWithInfoResponse {
    pub organization: Organization,
    pub params: Vec<String>,
    pub average: f64,
}

#[derive(Deserialize)]
pub struct AverageByTypeRequest {
    pub organization_type: String,
    pub params: Vec<String>,
    pub threshold: Option<f64>,
}

#[derive(Serialize)]
pub struct RankedOrganization {
    pub organization: Organization,
    pub average: f64,
}

#[derive(Serialize)]
pub struct AverageByTypeResponse {
    pub organization_type: String,
    pub params: Vec<String>,
    pub threshold: f64,
    pub items: Vec<RankedOrganization>,
}

/// Combined score for one organization over a caller-chosen dimension subset.
pub async fn average_handler(
    State(state): State<AppState>,
    Json(req): Json<AverageRequest>,
) -> Result<Json<AverageResponse>, (StatusCode, String)> {
    let dimensions = resolve_dimensions(&req.params)
        .map_err(|e| AppError::from(e).to_response())?;

    let aggregate = get_or_create_aggregate(req.organization_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(AverageResponse {
        organization_id: req.organization_id,
        average: combine_average(&aggregate, &dimensions),
        params: req.params,
    }))
}

/// Same as [`average_handler`] but also returns the organization record.
pub async fn average_with_info_handler(
    State(state): State<AppState>,
    Json(req): Json<AverageRequest>,
) -> Result<Json<AverageWithInfoResponse>, (StatusCode, String)> {
    let dimensions = resolve_dimensions(&req.params)
        .map_err(|e| AppError::from(e).to_response())?;

    let organization =
        crate::db::organization::get_organization(req.organization_id, state.redis.clone())
            .await
            .map_err(|e| e.to_response())?;

    let aggregate = get_or_create_aggregate(req.organization_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(AverageWithInfoResponse {
        organization,
        average: combine_average(&aggregate, &dimensions),
        params: req.params,
    }))
}

/// Scores every organization of a category and keeps those strictly above
/// the threshold, in listing order. Bad dimension names abort the whole
/// batch before any scoring happens.
pub async fn average_by_type_handler(
    State(state): State<AppState>,
    Json(req): Json<AverageByTypeRequest>,
) -> Result<Json<AverageByTypeResponse>, (StatusCode, String)> {
    let dimensions = resolve_dimensions(&req.params)
        .map_err(|e| AppError::from(e).to_response())?;
    let threshold = req.threshold.unwrap_or(DEFAULT_SCORE_THRESHOLD);

    let organizations = list_organizations_by_type(&req.organization_type, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    let mut scored = Vec::with_capacity(organizations.len());
    for org in organizations {
        let aggregate = get_or_create_aggregate(org.id, state.redis.clone())
            .await
            .map_err(|e| e.to_response())?;
        let score = combine_average(&aggregate, &dimensions);
        scored.push((org, score));
    }

    let items = retain_above(scored, threshold)
        .into_iter()
        .map(|(organization, average)| RankedOrganization {
            organization,
            average,
        })
        .collect();

    Ok(Json(AverageByTypeResponse {
        organization_type: req.organization_type,
        params: req.params,
        threshold,
        items,
    }))
}
