use crate::data::canned::{CANNED_PASSWORD, DOCTOR_EMAIL, PATIENT_EMAIL};
use crate::domain::models::{Credentials, Role};
use serde::Serialize;

/// Password satisfying the usual frontend strength rules.
pub const FIXTURE_PASSWORD: &str = "Test123!@#";

const FIRST_NAMES: &[&str] = &["Alice", "Robert", "Jane", "John", "Maria", "Peter"];
const LAST_NAMES: &[&str] = &["Smith", "Johnson", "Brown", "Taylor", "Lee", "Novak"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Signup-shaped test user. Serializes with the wire field names, so it can
/// be posted to the signup endpoint as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub birth_date: String,
    pub gender: Gender,
    pub role: Role,
}

/// Randomized but always-valid user. Emails land on a throwaway domain so
/// they can never collide with the canned roster or the reserved address.
pub fn generate_test_user() -> TestUser {
    let first = FIRST_NAMES[fastrand::usize(..FIRST_NAMES.len())];
    let last = LAST_NAMES[fastrand::usize(..LAST_NAMES.len())];
    let year = fastrand::u32(1950..=2005);
    let month = fastrand::u32(1..=12);
    let day = fastrand::u32(1..=28);

    TestUser {
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}.{}@e2e.test",
            first.to_ascii_lowercase(),
            last.to_ascii_lowercase(),
            fastrand::u32(1000..10000)
        ),
        password: FIXTURE_PASSWORD.to_string(),
        phone: Some(format!("+1-555-{:04}", fastrand::u32(..10000))),
        birth_date: format!("{year:04}-{month:02}-{day:02}"),
        gender: match fastrand::usize(..3) {
            0 => Gender::Male,
            1 => Gender::Female,
            _ => Gender::Other,
        },
        role: if fastrand::bool() {
            Role::Doctor
        } else {
            Role::Patient
        },
    }
}

/// Credentials matching the canned doctor pair.
pub fn valid_doctor() -> Credentials {
    Credentials {
        email: DOCTOR_EMAIL.to_string(),
        password: CANNED_PASSWORD.to_string(),
    }
}

/// Credentials matching the canned patient pair.
pub fn valid_patient() -> Credentials {
    Credentials {
        email: PATIENT_EMAIL.to_string(),
        password: CANNED_PASSWORD.to_string(),
    }
}

/// Guaranteed to miss every canned pair.
pub fn invalid_credentials() -> Credentials {
    Credentials {
        email: "nonexistent@test.com".to_string(),
        password: "WrongPassword123!".to_string(),
    }
}
