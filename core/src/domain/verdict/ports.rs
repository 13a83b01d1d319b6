use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    chat::entities::ChatTurn,
    common::entities::app_errors::CoreError,
    verdict::{
        entities::VerdictResult,
        value_objects::{ImagePayload, JudgeInput, MessagePart},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Single-shot structured generation: the model is constrained to the
    /// supplied response schema and returns the raw reply text.
    fn generate_structured(
        &self,
        parts: Vec<MessagePart>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Multi-turn plain-text generation for follow-up conversation.
    fn generate_conversation(
        &self,
        system_instruction: String,
        turns: Vec<ChatTurn>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Fetches a remote image so it can be inlined into the model request.
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: String) -> impl Future<Output = Result<ImagePayload, CoreError>> + Send;
}

/// Service trait for verdict synthesis
#[cfg_attr(test, mockall::automock)]
pub trait VerdictService: Send + Sync {
    fn judge(
        &self,
        identity: Identity,
        input: JudgeInput,
    ) -> impl Future<Output = Result<VerdictResult, CoreError>> + Send;
}
