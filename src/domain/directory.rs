use crate::domain::models::MockUser;
use anyhow::Result;
use async_trait::async_trait;

/// Lookup seam for the canned roster. Implementations are read-only; the
/// responder never writes through this trait.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Exact match on both email and password.
    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<MockUser>>;
    /// Whether signup must reject this email as already registered.
    async fn email_taken(&self, email: &str) -> Result<bool>;
}
