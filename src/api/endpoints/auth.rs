//! Login and signup request/response contracts.
//!
//! `POST /api/login`: 200 when `email`, `password` and `userType` are present
//! `POST /api/signup`: 201 when `name`, `email`, `password`, `userType` and `uid` are present
//!
//! Presence is the only check: no credential is verified and nothing is
//! stored. The password is accepted but never echoed or logged.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
    pub uid: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub email: String,
    pub user_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupUser {
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub uid: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse<U> {
    pub message: &'static str,
    pub user: U,
}

/// Empty strings count as missing.
fn present(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingFields),
    }
}

/// `POST /api/login`
pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse<LoginUser>>, ApiError> {
    let Json(request) = payload?;

    let email = present(request.email);
    let password = present(request.password);
    let user_type = present(request.user_type);
    let (email, _password, user_type) = match (email, password, user_type) {
        (Ok(e), Ok(p), Ok(u)) => (e, p, u),
        _ => {
            tracing::warn!("Login rejected: missing required fields");
            return Err(ApiError::MissingFields);
        }
    };

    tracing::info!(%user_type, "Login accepted");

    Ok(Json(AuthResponse {
        message: "Login successful",
        user: LoginUser { email, user_type },
    }))
}

/// `POST /api/signup`
pub async fn signup(
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse<SignupUser>>), ApiError> {
    let Json(request) = payload?;

    let fields = (
        present(request.name),
        present(request.email),
        present(request.password),
        present(request.user_type),
        present(request.uid),
    );
    let (name, email, _password, user_type, uid) = match fields {
        (Ok(n), Ok(e), Ok(p), Ok(t), Ok(u)) => (n, e, p, t, u),
        _ => {
            tracing::warn!("Signup rejected: missing required fields");
            return Err(ApiError::MissingFields);
        }
    };

    tracing::info!(%user_type, "Signup accepted");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Account created successfully",
            user: SignupUser {
                name,
                email,
                user_type,
                uid,
            },
        }),
    ))
}
