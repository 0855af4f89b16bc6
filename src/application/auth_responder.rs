use crate::domain::directory::UserDirectory;
use crate::domain::error::DomainError;
use crate::domain::models::{Credentials, MessageReply, MockUser, Role, SignupRequest};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument, trace, warn};

/// Synthetic id echoed back by every successful signup.
const SIGNUP_USER_ID: u32 = 3;
/// Record returned by `current_user`, independent of any prior call.
const SESSION_USER_ID: u32 = 1;

pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Deterministic responder for the auth endpoints. Every call is stateless
/// and independent; there is no session concept and no ordering dependency
/// between operations.
pub struct MockAuthService<D: UserDirectory> {
    directory: Arc<D>,
}

impl<D: UserDirectory> MockAuthService<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: Credentials) -> Result<MockUser> {
        trace!("Starting canned credential lookup");

        let user = self
            .directory
            .find_by_credentials(&req.email, &req.password)
            .await?
            .ok_or_else(|| {
                warn!(email = %req.email, "No canned pair matched");
                DomainError::InvalidCredentials
            })?;

        info!(user_id = user.id, role = ?user.role, "Login matched canned pair");
        Ok(user)
    }

    /// The reserved-email rejection runs before field validation: a reserved
    /// email with missing fields still reports "Email already exists".
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn signup(&self, req: SignupRequest) -> Result<MockUser> {
        trace!("Starting signup evaluation");

        if self.directory.email_taken(&req.email).await? {
            warn!(email = %req.email, "Signup rejected, email already registered");
            return Err(DomainError::EmailTaken.into());
        }

        let mut missing = Vec::new();
        if req.email.is_empty() {
            missing.push("email");
        }
        if req.password.is_empty() {
            missing.push("password");
        }
        if req.name.is_empty() {
            missing.push("name");
        }
        if !missing.is_empty() {
            warn!(fields = ?missing, "Signup rejected, required fields missing");
            return Err(DomainError::MissingFields(missing).into());
        }

        let role = req.role.unwrap_or(Role::Patient);
        let user = MockUser {
            id: SIGNUP_USER_ID,
            name: req.name,
            email: req.email,
            role,
        };

        info!(user_id = user.id, role = ?user.role, "Signup accepted");
        Ok(user)
    }

    pub fn logout(&self) -> MessageReply {
        info!("Logout acknowledged");
        MessageReply {
            message: LOGOUT_MESSAGE.to_string(),
        }
    }

    /// Fixed record regardless of any earlier login or signup.
    pub fn current_user(&self) -> MockUser {
        MockUser {
            id: SESSION_USER_ID,
            name: "Test User".to_string(),
            email: "test@test.com".to_string(),
            role: Role::Patient,
        }
    }
}
