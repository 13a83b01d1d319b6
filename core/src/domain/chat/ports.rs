use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, chat::value_objects::ChatInput,
    common::entities::app_errors::CoreError,
};

/// Service trait for follow-up conversation about a verdict
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    /// Returns the assistant's raw text reply, unmodified.
    fn follow_up(
        &self,
        identity: Identity,
        input: ChatInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
