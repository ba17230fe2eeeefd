//! Axum router and request handlers.

use crate::error::{ServingError, ServingResult};
use crate::predictor::{self, PredictionRequest};
use crate::session::{session_id_from_cookies, SESSION_COOKIE};
use crate::state::AppState;
use crate::store::{HouseDetails, HouseRecord};
use axum::extract::{Form, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router over shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict", axum::routing::post(predict))
        .route("/register", axum::routing::post(register))
        .route("/login", axum::routing::post(login))
        .route("/logout", axum::routing::post(logout))
        .route("/houses", get(list_houses).post(create_house))
        .route(
            "/houses/{id}",
            get(get_house).put(update_house).delete(delete_house),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    healthy: bool,
    model_features: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        model_features: state.bundle.model.input_dim(),
    })
}

#[derive(Debug, Serialize)]
struct PredictionResponse {
    estimate: f64,
}

/// Prediction endpoint.
///
/// Fields arrive as raw form strings and are coerced here so that a bad
/// value surfaces as a 400 naming the field, and an unknown style label as
/// a 422, never as a generic server error.
async fn predict(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> ServingResult<Json<PredictionResponse>> {
    let request = PredictionRequest::from_fields(&fields)?;
    let estimate = predictor::predict(&state.bundle, &request)?;
    Ok(Json(PredictionResponse { estimate }))
}

#[derive(Debug, Deserialize)]
struct RegisterForm {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> ServingResult<impl IntoResponse> {
    state
        .users
        .register(&form.username, &form.email, &form.password)?;
    info!(username = %form.username, "Registered user");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ServingResult<impl IntoResponse> {
    if !state.users.verify(&form.username, &form.password) {
        return Err(ServingError::InvalidCredentials);
    }

    let session_id = state.sessions.create(&form.username);
    info!(username = %form.username, "Logged in");
    Ok((
        AppendHeaders([(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly"),
        )]),
        Json(MessageResponse {
            message: "Logged in".to_string(),
        }),
    ))
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(session_id) = session_id_from_headers(&headers) {
        state.sessions.remove(&session_id);
    }
    (
        AppendHeaders([(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0"),
        )]),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

async fn list_houses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServingResult<Json<Vec<HouseRecord>>> {
    require_session(&state, &headers)?;
    Ok(Json(state.houses.list()))
}

async fn create_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(details): Form<HouseDetails>,
) -> ServingResult<impl IntoResponse> {
    require_session(&state, &headers)?;
    let record = state.houses.create(details);
    info!(id = record.id, "Added house");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ServingResult<Json<HouseRecord>> {
    require_session(&state, &headers)?;
    Ok(Json(state.houses.get(id)?))
}

async fn update_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(details): Form<HouseDetails>,
) -> ServingResult<Json<HouseRecord>> {
    require_session(&state, &headers)?;
    let record = state.houses.update(id, details)?;
    info!(id, "Updated house");
    Ok(Json(record))
}

async fn delete_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ServingResult<StatusCode> {
    require_session(&state, &headers)?;
    state.houses.delete(id)?;
    info!(id, "Deleted house");
    Ok(StatusCode::NO_CONTENT)
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(session_id_from_cookies)
        .map(str::to_string)
}

/// Resolve the logged-in username or reject with 401.
fn require_session(state: &AppState, headers: &HeaderMap) -> ServingResult<String> {
    session_id_from_headers(headers)
        .and_then(|id| state.sessions.username_for(&id))
        .ok_or(ServingError::Unauthorized)
}
