use crate::domain::directory::UserDirectory;
use crate::domain::models::{MockUser, Role};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument, trace};

pub const DOCTOR_EMAIL: &str = "doctor@test.com";
pub const PATIENT_EMAIL: &str = "patient@test.com";
pub const CANNED_PASSWORD: &str = "password123";
/// Signup with this address is always rejected as already registered.
pub const RESERVED_EMAIL: &str = "existing@test.com";

#[derive(Debug, Clone)]
struct RosterEntry {
    email: &'static str,
    password: &'static str,
    id: u32,
    name: &'static str,
    role: Role,
}

impl RosterEntry {
    fn to_user(&self) -> MockUser {
        MockUser {
            id: self.id,
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role,
        }
    }
}

/// Fixed roster of credential pairs. Immutable after construction, so it can
/// be shared freely across workers without locking.
#[derive(Clone)]
pub struct CannedUserDirectory {
    roster: Vec<RosterEntry>,
    reserved: Vec<&'static str>,
}

impl CannedUserDirectory {
    pub fn new() -> Self {
        Self {
            roster: vec![
                RosterEntry {
                    email: DOCTOR_EMAIL,
                    password: CANNED_PASSWORD,
                    id: 1,
                    name: "Dr. Test",
                    role: Role::Doctor,
                },
                RosterEntry {
                    email: PATIENT_EMAIL,
                    password: CANNED_PASSWORD,
                    id: 2,
                    name: "Patient Test",
                    role: Role::Patient,
                },
            ],
            reserved: vec![RESERVED_EMAIL],
        }
    }
}

impl Default for CannedUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for CannedUserDirectory {
    #[instrument(skip(self, password), fields(email = email))]
    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<MockUser>> {
        trace!("Scanning canned roster");
        let user = self
            .roster
            .iter()
            .find(|e| e.email == email && e.password == password)
            .map(RosterEntry::to_user);
        match &user {
            Some(u) => debug!(user_id = u.id, role = ?u.role, "Credentials matched roster entry"),
            None => trace!("No roster entry matched"),
        }
        Ok(user)
    }

    #[instrument(skip(self), fields(email = email))]
    async fn email_taken(&self, email: &str) -> Result<bool> {
        Ok(self.reserved.contains(&email))
    }
}
