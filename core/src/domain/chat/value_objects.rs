use crate::domain::chat::entities::ChatTurn;

/// Caller input for one follow-up exchange.
#[derive(Debug, Clone, Default)]
pub struct ChatInput {
    pub message: String,
    /// The verdict text the conversation is about.
    pub context: Option<String>,
    /// Optional replacement persona, persisted before the exchange.
    pub persona: Option<String>,
    /// Prior turns, oldest first. Only the most recent window is forwarded.
    pub history: Vec<ChatTurn>,
}
