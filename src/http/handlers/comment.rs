use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::{
        comment::{ingest_comment, list_comments},
        organization::get_organization,
        user::get_user_by_id,
    },
    errors::AppError,
    models::Comment,
    ratings::{Dimension, RatingAggregate, RatingEvent},
    state::AppState,
};

#[derive(Deserialize)]
pub struct RatedValuePayload {
    pub value: i64,
    pub remark: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCommentPayload {
    pub organization_id: u64,
    pub text: Option<String>,
    /// Sparse map of dimension name (canonical or alias) to rating.
    #[serde(default)]
    pub ratings: HashMap<String, RatedValuePayload>,
}

#[derive(Serialize)]
pub struct CreateCommentResponse {
    pub comment: Comment,
    pub updated_aggregates: RatingAggregate,
}

#[derive(Serialize)]
pub struct CommentListItem {
    pub id: u64,
    pub author_id: Uuid,
    pub author_name: String,
    pub text: Option<String>,
    pub comment_avg: Option<f64>,
}

#[derive(Serialize)]
pub struct CommentListResponse {
    pub organization_id: u64,
    pub items: Vec<CommentListItem>,
}

pub async fn create_comment_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateCommentPayload>,
) -> Result<(StatusCode, Json<CreateCommentResponse>), (StatusCode, String)> {
    let author_id = claims.user_id().map_err(|e| e.to_response())?;

    let mut event = RatingEvent::new();
    for (name, rated) in payload.ratings {
        let dimension = Dimension::resolve(&name)
            .ok_or_else(|| AppError::UnknownDimension(name.clone()).to_response())?;
        event
            .rate(dimension, rated.value, rated.remark)
            .map_err(|e| AppError::from(e).to_response())?;
    }

    match ingest_comment(
        payload.organization_id,
        author_id,
        payload.text,
        event,
        state.redis.clone(),
        state.aggregate_locks.clone(),
    )
    .await
    {
        Ok((comment, aggregate)) => {
            tracing::info!(
                "Comment {} ingested for organization {}",
                comment.id,
                comment.organization_id
            );
            Ok((
                StatusCode::CREATED,
                Json(CreateCommentResponse {
                    comment,
                    updated_aggregates: aggregate,
                }),
            ))
        }
        Err(err) => {
            tracing::error!(
                "Error ingesting comment for organization {}: {}",
                payload.organization_id,
                err
            );
            Err(err.to_response())
        }
    }
}

pub async fn list_comments_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
    Path(organization_id): Path<u64>,
) -> Result<Json<CommentListResponse>, (StatusCode, String)> {
    get_organization(organization_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    let comments = list_comments(organization_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    let mut items = Vec::with_capacity(comments.len());
    for comment in comments {
        let author_name = match get_user_by_id(comment.author_id, state.redis.clone()).await {
            Ok(user) => user.name,
            Err(_) => String::new(),
        };
        items.push(CommentListItem {
            id: comment.id,
            author_id: comment.author_id,
            author_name,
            text: comment.text,
            comment_avg: comment.comment_avg,
        });
    }

    Ok(Json(CommentListResponse {
        organization_id,
        items,
    }))
}
