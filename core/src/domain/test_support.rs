use crate::domain::{
    common::{AuthConfig, services::Service},
    crypto::ports::MockHasherRepository,
    health::ports::MockHealthCheckRepository,
    user::{entities::User, ports::MockUserRepository},
    verdict::ports::{MockImageFetcher, MockLLMClient},
};

pub type TestService = Service<
    MockUserRepository,
    MockHasherRepository,
    MockHealthCheckRepository,
    MockLLMClient,
    MockImageFetcher,
>;

pub fn mock_service() -> TestService {
    Service::new(
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_days: 7,
        },
        MockUserRepository::new(),
        MockHasherRepository::new(),
        MockHealthCheckRepository::new(),
        MockLLMClient::new(),
        MockImageFetcher::new(),
    )
}

pub fn user_with_persona(email: &str, persona: &str) -> User {
    User::new(
        email.to_string(),
        "$argon2id$stub".to_string(),
        persona.to_string(),
    )
}
