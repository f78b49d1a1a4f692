//! Session-scoped conversation state for the chat feature.

use crate::features::chat::{self, ChatReply};
use crate::gateway::ModelGateway;
use crate::types::{Message, NormalizedResult};

/// Ordered, role-tagged messages for one interactive session.
///
/// Grows by one user/assistant pair per turn, is cleared explicitly and is
/// never persisted anywhere. Turns are strictly serialized; there is no
/// concurrent writer by construction, which is why this is a plain struct and
/// not something synchronized.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Drop every recorded turn.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// One interactive chat session: a history plus the turn sequence that keeps
/// it consistent.
///
/// Each call to [`send`](ChatSession::send) records the user turn and the
/// assistant turn, in order, whether or not the underlying call succeeded.
/// Failed turns are recorded with their error text so the transcript a UI
/// renders from this history never has holes.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: ConversationHistory,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one turn against the gateway.
    pub async fn send(
        &mut self,
        gateway: &ModelGateway,
        message: &str,
    ) -> NormalizedResult<ChatReply> {
        // Prior turns only; the current user message is supplied separately
        // to the chat feature and recorded below.
        let result = chat::respond(gateway, message, self.history.messages()).await;

        self.history.push_user(message);
        match &result {
            NormalizedResult::Report(reply) => self.history.push_assistant(&reply.response),
            NormalizedResult::Failed { error } => {
                self.history.push_assistant(format!("Error: {error}"))
            }
        }
        result
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Reset the session to empty.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn history_records_turns_in_order() {
        let mut history = ConversationHistory::new();
        history.push_user("hi");
        history.push_assistant("hello");
        history.push_user("how are you?");

        assert_eq!(history.len(), 3);
        let roles: Vec<MessageRole> = history.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [MessageRole::User, MessageRole::Assistant, MessageRole::User]
        );
    }

    #[test]
    fn clear_empties_the_history() {
        let mut history = ConversationHistory::new();
        history.push_user("hi");
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn session_starts_empty_and_clears() {
        let mut session = ChatSession::new();
        assert!(session.history().is_empty());
        session.clear();
        assert!(session.history().is_empty());
    }
}
