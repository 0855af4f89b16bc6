use crate::application::auth_responder::MockAuthService;
use crate::data::canned::CannedUserDirectory;
use crate::domain::error::DomainError;
use crate::domain::models::{Credentials, LoginReply, SignupRequest};
use actix_web::{HttpResponse, ResponseError, web};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub struct AppState {
    pub auth: MockAuthService<CannedUserDirectory>,
}

// Uniform error body: {"message": ...} plus an optional per-field map
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<HashMap<String, String>>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Missing required fields")]
    MissingFields(Vec<String>),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            ApiError::InvalidCredentials => actix_web::http::StatusCode::UNAUTHORIZED,
            ApiError::EmailTaken => actix_web::http::StatusCode::BAD_REQUEST,
            ApiError::MissingFields(_) => actix_web::http::StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => actix_web::http::StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let (message, errors) = match self {
            ApiError::InvalidCredentials => ("Invalid credentials".to_string(), None),
            ApiError::EmailTaken => ("Email already exists".to_string(), None),
            ApiError::MissingFields(fields) => {
                let errors = fields
                    .iter()
                    .map(|f| (f.clone(), format!("{f} is required")))
                    .collect::<HashMap<_, _>>();
                ("Missing required fields".to_string(), Some(errors))
            }
            ApiError::Validation(msg) => (msg.clone(), None),
            ApiError::Internal(msg) => (msg.clone(), None),
        };

        match self {
            ApiError::InvalidCredentials => {
                warn!(status = %status, "Authentication failure")
            }
            ApiError::EmailTaken | ApiError::MissingFields(_) | ApiError::Validation(_) => {
                warn!(message = %message, status = %status, "Validation failure")
            }
            ApiError::Internal(_) => {
                error!(message = %message, status = %status, "Internal error")
            }
        }

        HttpResponse::build(status).json(ErrorBody { message, errors })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::InvalidCredentials) => ApiError::InvalidCredentials,
            Some(DomainError::EmailTaken) => ApiError::EmailTaken,
            Some(DomainError::MissingFields(fields)) => {
                ApiError::MissingFields(fields.iter().map(|f| f.to_string()).collect())
            }
            Some(DomainError::Validation(msg)) => ApiError::Validation(msg.clone()),
            Some(DomainError::Internal(msg)) => ApiError::Internal(msg.clone()),
            None => ApiError::Internal(err.to_string()),
        }
    }
}

// Handlers

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

#[instrument]
pub async fn health_check() -> HttpResponse {
    info!("Health check requested");
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    HttpResponse::Ok().json(response)
}

#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<Credentials>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");
    let user = state.auth.login(req.into_inner()).await.map_err(|e| {
        warn!(error = %e, "Login rejected");
        ApiError::from(e)
    })?;
    info!(user_id = user.id, "Login succeeded");
    Ok(HttpResponse::Ok().json(LoginReply { user }))
}

#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Signup request received");
    let user = state.auth.signup(req.into_inner()).await.map_err(|e| {
        warn!(error = %e, "Signup rejected");
        ApiError::from(e)
    })?;
    info!(user_id = user.id, email = %user.email, "Signup succeeded");
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(skip(state))]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    info!("Logout request received");
    HttpResponse::Ok().json(state.auth.logout())
}

#[instrument(skip(state))]
pub async fn me(state: web::Data<AppState>) -> HttpResponse {
    info!("Current-user request received");
    HttpResponse::Ok().json(state.auth.current_user())
}
