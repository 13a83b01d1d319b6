use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    user::ports::{UserRepository, UserService},
    verdict::{
        entities::VerdictResult,
        helpers::{parse_data_url, parse_verdict_reply},
        ports::{ImageFetcher, LLMClient, VerdictService},
        schema::verdict_response_schema,
        value_objects::{JudgeInput, MessagePart},
    },
};

/// Persona used when the caller has never stored one.
pub const DEFAULT_PERSONA: &str = "a consumer looking for healthy choices";

/// Builds the instruction block: the resolved persona plus the output
/// contract the model must answer with, and nothing else.
pub fn build_verdict_prompt(persona: &str) -> String {
    format!(
        "You are a nutrition analyst. \
         User health context: {persona}. \
         Analyze the product described by the following ingredient list and/or label photo, \
         judging it against the user's health context. \
         Return ONLY a JSON object in this exact format, with no prose around it:\n\
         {{\n\
           \"verdict\": \"SAFE\" | \"CAUTION\" | \"AVOID\",\n\
           \"short_reason\": \"\",\n\
           \"detailed_reason\": \"\",\n\
           \"ui_theme\": \"green\" | \"yellow\" | \"red\",\n\
           \"highlighted_ingredients\": [],\n\
           \"uncertainty_note\": \"Mention if the image is blurry or ingredients are unclear\"\n\
         }}"
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl<U, H, HC, LLM, IF> VerdictService for Service<U, H, HC, LLM, IF>
where
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IF: ImageFetcher,
{
    async fn judge(
        &self,
        identity: Identity,
        input: JudgeInput,
    ) -> Result<VerdictResult, CoreError> {
        // 1. Reject empty requests before anything reaches the model
        let ingredients = non_empty(&input.ingredients);
        let image_url = non_empty(&input.image_url);
        if ingredients.is_none() && image_url.is_none() {
            return Err(CoreError::Invalid(
                "Ingredients or an image is required".to_string(),
            ));
        }

        // 2. Refresh and resolve the caller's persona
        let user = self.ensure_profile(identity, input.persona.clone()).await?;
        let persona = if user.persona.is_empty() {
            DEFAULT_PERSONA
        } else {
            user.persona.as_str()
        };

        // 3. Assemble the request parts; text is kept even when an image is present
        let mut parts = vec![MessagePart::Text(build_verdict_prompt(persona))];
        if let Some(text) = ingredients {
            parts.push(MessagePart::Text(format!("Ingredients list: {text}")));
        }
        if let Some(url) = image_url {
            let payload = if url.starts_with("data:") {
                parse_data_url(url)?
            } else {
                self.image_fetcher.fetch(url.to_string()).await?
            };
            parts.push(MessagePart::Image(payload));
        }

        // 4. One synchronous round trip, no retry
        let raw_reply = self
            .llm_client
            .generate_structured(parts, verdict_response_schema())
            .await?;

        // 5. Parse, or degrade to the deterministic fallback
        Ok(parse_verdict_reply(&raw_reply))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        test_support::{mock_service, user_with_persona},
        verdict::{
            entities::{FALLBACK_UNCERTAINTY_NOTE, UiTheme, Verdict},
            value_objects::ImagePayload,
        },
    };

    const STRUCTURED_REPLY: &str = r#"{
        "verdict": "AVOID",
        "short_reason": "Contains lactose",
        "detailed_reason": "Milk solids conflict with the stored intolerance.",
        "ui_theme": "red",
        "highlighted_ingredients": ["milk solids"],
        "uncertainty_note": ""
    }"#;

    #[tokio::test]
    async fn judge_rejects_empty_input_before_calling_the_model() {
        let service = mock_service();
        // No expectations set: any repository or model call would panic.

        let err = service
            .judge(Identity::new("a@x.com".to_string()), JudgeInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn judge_passes_a_well_formed_reply_through_unchanged() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", "lactose intolerant"))) }));
        service
            .llm_client
            .expect_generate_structured()
            .withf(|parts, schema| {
                matches!(&parts[0], MessagePart::Text(prompt) if prompt.contains("lactose intolerant"))
                    && matches!(&parts[1], MessagePart::Text(text) if text.contains("sugar, salt"))
                    && schema["required"].is_array()
            })
            .returning(|_, _| Box::pin(async move { Ok(STRUCTURED_REPLY.to_string()) }));

        let result = service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    ingredients: Some("sugar, salt".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.verdict, Verdict::Avoid);
        assert_eq!(result.ui_theme, UiTheme::Red);
        assert_eq!(result.short_reason, "Contains lactose");
        assert_eq!(result.highlighted_ingredients, vec!["milk solids"]);
    }

    #[tokio::test]
    async fn judge_falls_back_when_the_model_returns_prose() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", ""))) }));
        service
            .llm_client
            .expect_generate_structured()
            .returning(|_, _| Box::pin(async move { Ok("Sorry, I cannot help".to_string()) }));

        let result = service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    ingredients: Some("sugar".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.verdict, Verdict::Caution);
        assert_eq!(result.ui_theme, UiTheme::Yellow);
        assert_eq!(result.detailed_reason, "Sorry, I cannot help");
        assert_eq!(result.uncertainty_note, FALLBACK_UNCERTAINTY_NOTE);
    }

    #[tokio::test]
    async fn judge_uses_the_default_persona_when_none_is_stored() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", ""))) }));
        service
            .llm_client
            .expect_generate_structured()
            .withf(|parts, _| {
                matches!(&parts[0], MessagePart::Text(prompt) if prompt.contains(DEFAULT_PERSONA))
            })
            .returning(|_, _| Box::pin(async move { Ok(STRUCTURED_REPLY.to_string()) }));

        service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    ingredients: Some("sugar".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn judge_inlines_a_data_url_without_fetching() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", "x"))) }));
        service
            .llm_client
            .expect_generate_structured()
            .withf(|parts, _| {
                matches!(
                    &parts[1],
                    MessagePart::Image(ImagePayload { mime_type, data })
                        if mime_type == "image/png" && data == b"hello"
                )
            })
            .returning(|_, _| Box::pin(async move { Ok(STRUCTURED_REPLY.to_string()) }));

        service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    image_url: Some("data:image/png;base64,aGVsbG8=".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn judge_fetches_remote_image_urls() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", "x"))) }));
        service
            .image_fetcher
            .expect_fetch()
            .with(eq("https://cdn.example.com/label.jpg".to_string()))
            .returning(|_| {
                Box::pin(async move {
                    Ok(ImagePayload {
                        mime_type: "image/jpeg".to_string(),
                        data: vec![1, 2, 3],
                    })
                })
            });
        service
            .llm_client
            .expect_generate_structured()
            .withf(|parts, _| {
                // prompt text, ingredients text, then the fetched image
                parts.len() == 3
                    && matches!(&parts[2], MessagePart::Image(p) if p.data == vec![1, 2, 3])
            })
            .returning(|_, _| Box::pin(async move { Ok(STRUCTURED_REPLY.to_string()) }));

        service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    ingredients: Some("sugar".to_string()),
                    image_url: Some("https://cdn.example.com/label.jpg".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn judge_surfaces_upstream_failure_as_external_service_error() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async move { Ok(Some(user_with_persona("a@x.com", "x"))) }));
        service
            .llm_client
            .expect_generate_structured()
            .returning(|_, _| Box::pin(async move { Err(CoreError::ExternalServiceError("timeout".to_string())) }));

        let err = service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    ingredients: Some("sugar".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn judge_persists_a_supplied_persona_before_synthesis() {
        let mut service = mock_service();
        let stored = user_with_persona("a@x.com", "old");
        let stored_id = stored.id;
        service
            .user_repository
            .expect_get_by_email()
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });
        service
            .user_repository
            .expect_update_persona()
            .with(eq(stored_id), eq("no added sugar".to_string()))
            .times(1)
            .returning(|_, persona| Box::pin(async move { Ok(user_with_persona("a@x.com", &persona)) }));
        service
            .llm_client
            .expect_generate_structured()
            .withf(|parts, _| {
                matches!(&parts[0], MessagePart::Text(prompt) if prompt.contains("no added sugar"))
            })
            .returning(|_, _| Box::pin(async move { Ok(STRUCTURED_REPLY.to_string()) }));

        service
            .judge(
                Identity::new("a@x.com".to_string()),
                JudgeInput {
                    ingredients: Some("sugar".to_string()),
                    persona: Some("no added sugar".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}
