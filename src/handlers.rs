use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    AppState,
    dates::{day_key, parse_day},
    error::ApiError,
    models::{Booking, BookingRequest, Class, CreateClassRequest},
    validation::validate_required,
};

#[utoipa::path(get, path = "/", tag = "studio")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Studio Classes API",
        "endpoints": {
            "/classes": "POST - create classes over a date range",
            "/bookings": "POST - book a slot on a class day"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "studio")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "studio")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// Method-router fallback for the two POST endpoints.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Invalid request method: expected POST".into())
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| ApiError::BadRequest("Unable to decode the request body payload".into()))
}

fn json_message(status: StatusCode, message: String) -> Result<Response, ApiError> {
    let body = serde_json::to_string(&serde_json::json!({ "message": message }))
        .map_err(|_| ApiError::Internal("Failed to encode response".into()))?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Classes created for every day in the range"),
        (status = 400, description = "Malformed payload, missing field, bad date or inverted range"),
        (status = 405, description = "Wrong request method"),
        (status = 409, description = "A day in the range already has a class")
    ),
    tag = "studio"
)]
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let req = decode(payload)?;
    validate_required(&req)?;

    let start_date = parse_day(&req.start_date)
        .map_err(|_| ApiError::BadRequest("Invalid start date format".into()))?;
    let end_date = parse_day(&req.end_date)
        .map_err(|_| ApiError::BadRequest("Invalid end date format".into()))?;

    if start_date > end_date {
        return Err(ApiError::BadRequest(
            "start date cannot be after end date".into(),
        ));
    }

    let class = Class {
        class_name: req.class_name,
        start_date,
        end_date,
        capacity: req.capacity,
    };
    state.classes.insert_range(class.clone()).await?;

    tracing::info!(
        class_name = %class.class_name,
        start = %day_key(start_date),
        end = %day_key(end_date),
        "class range created"
    );

    json_message(
        StatusCode::CREATED,
        format!(
            "created {} classes between {} and {} with Capacity: {}",
            class.class_name,
            day_key(start_date),
            day_key(end_date),
            class.capacity
        ),
    )
}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Name enrolled for the class day"),
        (status = 400, description = "Malformed payload, missing field, bad date or no class that day"),
        (status = 405, description = "Wrong request method"),
        (status = 409, description = "Name already enrolled for that day")
    ),
    tag = "studio"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let req = decode(payload)?;
    validate_required(&req)?;

    let date =
        parse_day(&req.date).map_err(|_| ApiError::BadRequest("Invalid date format".into()))?;

    if !state.classes.contains_day(date).await {
        return Err(ApiError::BadRequest(
            "We don't have a class on this day".into(),
        ));
    }

    let booking = Booking {
        name: req.name,
        date,
    };
    state.bookings.enroll(&booking).await?;

    tracing::info!(name = %booking.name, date = %day_key(date), "booking recorded");

    json_message(
        StatusCode::CREATED,
        format!(
            "{} has been enrolled for class on {}",
            booking.name,
            day_key(date)
        ),
    )
}
