//! Freeform conversation with the assistant persona.

use crate::gateway::ModelGateway;
use crate::types::{Message, NormalizedResult};
use serde::{Deserialize, Serialize};

/// Persona and guardrails for every chat turn. Sent as the system message
/// ahead of the running history.
pub const SYSTEM_PROMPT: &str = "You are a helpful, friendly, and knowledgeable AI assistant. You provide accurate, \nthoughtful responses to user questions. You're designed to be helpful, harmless, and honest.\nIf you don't know something, admit it rather than making up information.\nIf the question is unclear, ask for clarification. If the question is inappropriate, politely decline to answer.";

/// One assistant turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Answer `message` in the context of prior turns.
///
/// `history` holds the conversation so far, oldest first, without the current
/// user message; that is appended here after the system prompt.
pub async fn respond(
    gateway: &ModelGateway,
    message: &str,
    history: &[Message],
) -> NormalizedResult<ChatReply> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(SYSTEM_PROMPT));
    messages.extend_from_slice(history);
    messages.push(Message::user(message));

    match gateway.dispatch(messages).send().await {
        Ok(response) => NormalizedResult::Report(ChatReply { response }),
        Err(err) => NormalizedResult::failed(err),
    }
}
