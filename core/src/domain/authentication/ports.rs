use std::future::Future;

use crate::domain::{
    authentication::value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    common::entities::app_errors::CoreError,
};

/// Service trait for credential-based session issuance and validation
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn verify_token(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
