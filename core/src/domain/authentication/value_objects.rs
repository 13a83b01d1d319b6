use serde::{Deserialize, Serialize};

/// A verified identifier extracted from a session token. Handlers receive it
/// as an explicit parameter; it is never smuggled through ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Output of a successful sign-up or login.
#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub token: String,
    pub user: crate::domain::user::entities::User,
}
