use crate::domain::common::AuthConfig;

/// The assembled application service. Every collaborator is injected at
/// construction time so each one can be replaced with a mock in tests.
#[derive(Debug, Clone)]
pub struct Service<U, H, HC, LLM, IF> {
    pub auth_config: AuthConfig,
    pub user_repository: U,
    pub hasher_repository: H,
    pub health_check_repository: HC,
    pub llm_client: LLM,
    pub image_fetcher: IF,
}

impl<U, H, HC, LLM, IF> Service<U, H, HC, LLM, IF> {
    pub fn new(
        auth_config: AuthConfig,
        user_repository: U,
        hasher_repository: H,
        health_check_repository: HC,
        llm_client: LLM,
        image_fetcher: IF,
    ) -> Self {
        Self {
            auth_config,
            user_repository,
            hasher_repository,
            health_check_repository,
            llm_client,
            image_fetcher,
        }
    }
}
