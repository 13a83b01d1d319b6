use crate::{
    domain::common::{NutripilotConfig, services::Service},
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        llm::{GeminiLLMClient, HttpImageFetcher},
        user::PostgresUserRepository,
    },
};

pub type NutripilotService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    PostgresHealthCheckRepository,
    GeminiLLMClient,
    HttpImageFetcher,
>;

pub async fn create_service(config: NutripilotConfig) -> Result<NutripilotService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let hasher_repository = Argon2HasherRepository::new();
    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
    );
    let image_fetcher = HttpImageFetcher::new();

    Ok(Service::new(
        config.auth,
        user_repository,
        hasher_repository,
        health_check_repository,
        llm_client,
        image_fetcher,
    ))
}
