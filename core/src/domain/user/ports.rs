use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::User,
};

/// Repository trait for user records
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_persona(
        &self,
        user_id: Uuid,
        persona: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

/// Service trait for the stored health profile (persona)
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    /// Returns the stored persona, or an empty string when the identifier
    /// has no record yet. Never creates a record.
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Creates the user record on first contact and overwrites the persona
    /// whenever a non-empty one is supplied. Runs before every analysis so
    /// a returning caller's profile is current at synthesis time.
    fn ensure_profile(
        &self,
        identity: Identity,
        supplied_persona: Option<String>,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
