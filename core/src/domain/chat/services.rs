use crate::domain::{
    authentication::value_objects::Identity,
    chat::{
        entities::{ChatRole, ChatTurn},
        ports::ChatService,
        value_objects::ChatInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    user::ports::{UserRepository, UserService},
    verdict::{
        ports::{ImageFetcher, LLMClient},
        services::DEFAULT_PERSONA,
    },
};

/// Upper bound on forwarded history; older turns are dropped.
pub const MAX_HISTORY_TURNS: usize = 20;

fn build_followup_instruction(context: &str, persona: &str) -> String {
    format!(
        "You are a nutrition assistant answering follow-up questions about a product \
         that was just analyzed.\n\n\
         CONTEXT OF CURRENT PRODUCT:\n\"{context}\"\n\n\
         USER HEALTH PROFILE:\n\"{persona}\"\n\n\
         Your goal: answer the user's follow-up questions about this product.\n\
         - Be brief and conversational.\n\
         - If they ask for alternatives, suggest specific healthy swaps.\n\
         - If they ask \"Why?\", explain the science simply.\n\
         - Keep answers under 3 sentences unless asked for more detail."
    )
}

impl<U, H, HC, LLM, IF> ChatService for Service<U, H, HC, LLM, IF>
where
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IF: ImageFetcher,
{
    async fn follow_up(&self, identity: Identity, input: ChatInput) -> Result<String, CoreError> {
        if input.message.trim().is_empty() {
            return Err(CoreError::Invalid("A message is required".to_string()));
        }

        let user = self.ensure_profile(identity, input.persona.clone()).await?;
        let persona = if user.persona.is_empty() {
            DEFAULT_PERSONA
        } else {
            user.persona.as_str()
        };

        let instruction =
            build_followup_instruction(input.context.as_deref().unwrap_or_default(), persona);

        // System turns belong in the instruction, not the transcript
        let mut turns: Vec<ChatTurn> = input
            .history
            .into_iter()
            .filter(|turn| turn.role != ChatRole::System)
            .collect();
        if turns.len() > MAX_HISTORY_TURNS {
            turns.drain(..turns.len() - MAX_HISTORY_TURNS);
        }
        turns.push(ChatTurn::user(input.message));

        self.llm_client
            .generate_conversation(instruction, turns)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{mock_service, user_with_persona};

    fn known_user(service: &mut crate::domain::test_support::TestService) {
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", "diabetic"))) }));
    }

    #[tokio::test]
    async fn follow_up_rejects_an_empty_message() {
        let service = mock_service();

        let err = service
            .follow_up(Identity::new("a@x.com".to_string()), ChatInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn follow_up_embeds_context_and_persona_in_the_instruction() {
        let mut service = mock_service();
        known_user(&mut service);
        service
            .llm_client
            .expect_generate_conversation()
            .withf(|instruction, turns| {
                instruction.contains("verdict: AVOID")
                    && instruction.contains("diabetic")
                    && turns.last().map(|t| t.content.as_str()) == Some("Why is it bad?")
            })
            .returning(|_, _| Box::pin(async move { Ok("Because of the sugar load.".to_string()) }));

        let reply = service
            .follow_up(
                Identity::new("a@x.com".to_string()),
                ChatInput {
                    message: "Why is it bad?".to_string(),
                    context: Some("verdict: AVOID".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(reply, "Because of the sugar load.");
    }

    #[tokio::test]
    async fn follow_up_bounds_the_forwarded_history() {
        let mut service = mock_service();
        known_user(&mut service);
        service
            .llm_client
            .expect_generate_conversation()
            .withf(|_, turns| {
                // window plus the new user turn, oldest entries dropped
                turns.len() == MAX_HISTORY_TURNS + 1 && turns[0].content == "turn 10"
            })
            .returning(|_, _| Box::pin(async move { Ok("ok".to_string()) }));

        let history = (0..30)
            .map(|i| ChatTurn::user(format!("turn {}", i)))
            .collect();

        service
            .follow_up(
                Identity::new("a@x.com".to_string()),
                ChatInput {
                    message: "latest".to_string(),
                    history,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn follow_up_drops_system_turns_from_history() {
        let mut service = mock_service();
        known_user(&mut service);
        service
            .llm_client
            .expect_generate_conversation()
            .withf(|_, turns| turns.iter().all(|t| t.role != ChatRole::System))
            .returning(|_, _| Box::pin(async move { Ok("ok".to_string()) }));

        let history = vec![
            ChatTurn {
                role: ChatRole::System,
                content: "injected".to_string(),
            },
            ChatTurn::assistant("earlier reply".to_string()),
        ];

        service
            .follow_up(
                Identity::new("a@x.com".to_string()),
                ChatInput {
                    message: "hi".to_string(),
                    history,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn follow_up_surfaces_upstream_failure() {
        let mut service = mock_service();
        known_user(&mut service);
        service
            .llm_client
            .expect_generate_conversation()
            .returning(|_, _| Box::pin(async move { Err(CoreError::ExternalServiceError("503".to_string())) }));

        let err = service
            .follow_up(
                Identity::new("a@x.com".to_string()),
                ChatInput {
                    message: "hi".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
