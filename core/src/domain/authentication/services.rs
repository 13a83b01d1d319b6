use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::{
    authentication::{
        entities::JwtClaim,
        ports::AuthService,
        value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    user::{entities::User, ports::UserRepository},
    verdict::ports::{ImageFetcher, LLMClient},
};

impl<U, H, HC, LLM, IF> Service<U, H, HC, LLM, IF>
where
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IF: ImageFetcher,
{
    fn issue_token(&self, email: &str) -> Result<String, CoreError> {
        let now = Utc::now();
        let claims = JwtClaim {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.auth_config.token_ttl_days)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.auth_config.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            CoreError::InternalServerError
        })
    }
}

impl<U, H, HC, LLM, IF> AuthService for Service<U, H, HC, LLM, IF>
where
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IF: ImageFetcher,
{
    async fn register(&self, input: RegisterInput) -> Result<AuthOutput, CoreError> {
        let existing = self
            .user_repository
            .get_by_email(input.email.clone())
            .await?;
        if existing.is_some() {
            return Err(CoreError::AlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;
        let user = User::new(input.email, password_hash, String::new());
        let user = self.user_repository.create_user(user).await?;

        let token = self.issue_token(&user.email)?;
        tracing::info!("User registered: {}", user.id);

        Ok(AuthOutput { token, user })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::NotFound)?;

        let valid = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;
        if !valid {
            return Err(CoreError::InvalidCredential);
        }

        let token = self.issue_token(&user.email)?;
        tracing::info!("User logged in: {}", user.id);

        Ok(AuthOutput { token, user })
    }

    async fn verify_token(&self, token: String) -> Result<Identity, CoreError> {
        let data = decode::<JwtClaim>(
            &token,
            &DecodingKey::from_secret(self.auth_config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| CoreError::Unauthenticated(format!("Invalid token: {}", e)))?;

        Ok(Identity::new(data.claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::test_support::{mock_service, user_with_persona};

    fn register_input() -> RegisterInput {
        RegisterInput {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        }
    }

    #[tokio::test]
    async fn register_issues_token_that_verifies_to_the_same_email() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(None) }));
        service
            .hasher_repository
            .expect_hash_password()
            .with(eq("pw1".to_string()))
            .returning(|_| Box::pin(async move { Ok("$argon2id$stub".to_string()) }));
        service
            .user_repository
            .expect_create_user()
            .withf(|user| user.email == "a@x.com" && user.persona.is_empty())
            .returning(|user| Box::pin(async move { Ok(user) }));

        let output = service.register(register_input()).await.unwrap();
        let identity = service.verify_token(output.token).await.unwrap();

        assert_eq!(identity.email, "a@x.com");
    }

    #[tokio::test]
    async fn register_fails_when_identifier_is_taken() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", ""))) }));

        let err = service.register(register_input()).await.unwrap_err();

        assert_eq!(err, CoreError::AlreadyExists);
    }

    #[tokio::test]
    async fn login_fails_with_not_found_for_unknown_email() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(None) }));

        let err = service
            .login(LoginInput {
                email: "nobody@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn login_never_succeeds_with_a_wrong_password() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", ""))) }));
        service
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Box::pin(async move { Ok(false) }));

        // A near-miss is still a miss.
        let err = service
            .login(LoginInput {
                email: "a@x.com".to_string(),
                password: "pw1 ".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidCredential);
    }

    #[tokio::test]
    async fn verify_token_rejects_garbage() {
        let service = mock_service();

        let err = service
            .verify_token("not-a-token".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn verify_token_rejects_expired_tokens() {
        let service = mock_service();
        let past = Utc::now() - Duration::days(1);
        let claims = JwtClaim {
            sub: "a@x.com".to_string(),
            iat: (past - Duration::days(7)).timestamp(),
            exp: past.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(service.auth_config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = service.verify_token(token).await.unwrap_err();

        assert!(matches!(err, CoreError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn verify_token_rejects_a_foreign_signature() {
        let service = mock_service();
        let claims = JwtClaim {
            sub: "a@x.com".to_string(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::days(7)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();

        let err = service.verify_token(token).await.unwrap_err();

        assert!(matches!(err, CoreError::Unauthenticated(_)));
    }
}
