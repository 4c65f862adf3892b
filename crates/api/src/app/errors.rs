use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_ledger::MovementType;

/// `axum::Json` whose rejection is the 400 validation envelope instead of
/// axum's plain-text default. Bodies that fail to deserialize come back
/// through the same error shape as every other validation failure.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rejection.body_text(),
            )),
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::InsufficientStock { requested, available } => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "insufficient_stock",
            format!("insufficient stock: requested {requested}, available {available}"),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_movement_type(s: &str) -> Result<MovementType, axum::response::Response> {
    match s.to_lowercase().as_str() {
        "in" => Ok(MovementType::In),
        "out" => Ok(MovementType::Out),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "invalid_movement_type",
            "type must be one of: in, out",
        )),
    }
}
