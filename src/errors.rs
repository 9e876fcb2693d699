use axum::http::StatusCode;
use redis::RedisError;
use thiserror::Error;

use crate::ratings::RatingError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Redis pool error: {0}")]
    RedisPoolError(String),

    #[error("Redis command error: {0}")]
    RedisCommandError(#[from] RedisError),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    HashError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("No dimensions provided")]
    EmptyDimensionSet,

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Internal server error")]
    InternalError,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::RedisPoolError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
            AppError::RedisCommandError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::JwtError(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AppError::HashError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Serialization(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Deserialization(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::InvalidRating(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnknownDimension(name) => (
                StatusCode::BAD_REQUEST,
                format!("unknown dimension: {name}"),
            ),
            AppError::EmptyDimensionSet => {
                (StatusCode::BAD_REQUEST, "no dimensions provided".into())
            }
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }
}

impl From<RatingError> for AppError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::InvalidRating { .. } => AppError::InvalidRating(err.to_string()),
            RatingError::DuplicateDimension(_) => AppError::BadRequest(err.to_string()),
            RatingError::UnknownDimension(name) => AppError::UnknownDimension(name),
            RatingError::EmptyDimensionSet => AppError::EmptyDimensionSet,
        }
    }
}
