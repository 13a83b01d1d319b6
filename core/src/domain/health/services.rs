use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    user::ports::UserRepository,
    verdict::ports::{ImageFetcher, LLMClient},
};

impl<U, H, HC, LLM, IF> HealthCheckService for Service<U, H, HC, LLM, IF>
where
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IF: ImageFetcher,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
