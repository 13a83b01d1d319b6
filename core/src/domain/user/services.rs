use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
    },
    verdict::ports::{ImageFetcher, LLMClient},
};

impl<U, H, HC, LLM, IF> UserService for Service<U, H, HC, LLM, IF>
where
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IF: ImageFetcher,
{
    async fn get_profile(&self, identity: Identity) -> Result<String, CoreError> {
        let user = self.user_repository.get_by_email(identity.email).await?;

        Ok(user.map(|u| u.persona).unwrap_or_default())
    }

    async fn ensure_profile(
        &self,
        identity: Identity,
        supplied_persona: Option<String>,
    ) -> Result<User, CoreError> {
        let existing = self
            .user_repository
            .get_by_email(identity.email.clone())
            .await?;

        match existing {
            None => {
                // First contact through a verified session: the record is
                // created without a credential (sign-up sets one).
                let user = User::new(
                    identity.email,
                    String::new(),
                    supplied_persona.unwrap_or_default(),
                );
                self.user_repository.create_user(user).await
            }
            Some(user) => match supplied_persona {
                Some(persona) if !persona.is_empty() => {
                    self.user_repository.update_persona(user.id, persona).await
                }
                _ => Ok(user),
            },
        }
    }
}
