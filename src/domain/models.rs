use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Doctor,
    Patient,
}

/// Canned user record returned by the responder. Nothing behind it persists
/// beyond the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup payload. The three required fields default to empty strings so an
/// absent field and an empty field take the same validation path.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginReply {
    pub user: MockUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageReply {
    pub message: String,
}
