use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Password hashing seam. Verification must not leak timing information
/// about how close the supplied password is to the stored one.
#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(
        &self,
        password: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn verify_password(
        &self,
        password: String,
        hash: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
