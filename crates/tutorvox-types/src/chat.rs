//! Chat request and result types.
//!
//! A caller resends the whole conversation on every request; nothing here is
//! persisted server-side.

use serde::{Deserialize, Serialize};

use crate::llm::Message;
use crate::speech::AudioFormat;

pub use crate::llm::MessageRole;

/// One prior exchange in the caller-supplied conversation.
///
/// The role is a closed enum, so unknown roles fail deserialization before
/// the request reaches any provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: MessageRole,
    pub content: String,
}

impl From<ChatTurn> for Message {
    fn from(turn: ChatTurn) -> Self {
        Message {
            role: turn.role,
            content: turn.content,
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user message.
    pub message: String,
    /// Earlier turns in chronological order.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Reply returned to the caller after a successful chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    pub agent_text_message: String,
    /// URL path of the synthesized reply, e.g. `/audio/<uuid>.mp3`.
    pub agent_audio_message: String,
    pub format: AudioFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"Hello"}"#).unwrap();
        assert_eq!(req.message, "Hello");
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_chat_request_parses_history_in_order() {
        let req: ChatRequest = serde_json::from_str(
            r#"{
                "message": "And now?",
                "history": [
                    {"role": "user", "content": "I goed to school"},
                    {"role": "assistant", "content": "I went to school"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(req.history.len(), 2);
        assert_eq!(req.history[0].role, MessageRole::User);
        assert_eq!(req.history[1].role, MessageRole::Assistant);
        assert_eq!(req.history[1].content, "I went to school");
    }

    #[test]
    fn test_chat_request_rejects_unknown_role() {
        let result = serde_json::from_str::<ChatRequest>(
            r#"{"message":"hi","history":[{"role":"tool","content":"x"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_requires_message() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"history":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_result_wire_shape() {
        let result = ChatResult {
            agent_text_message: "Great job!".to_string(),
            agent_audio_message: "/audio/abc.mp3".to_string(),
            format: AudioFormat::Mp3,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["agent_text_message"], "Great job!");
        assert_eq!(json["agent_audio_message"], "/audio/abc.mp3");
        assert_eq!(json["format"], "mp3");
    }

    #[test]
    fn test_chat_turn_into_message() {
        let turn = ChatTurn {
            role: MessageRole::System,
            content: "Be brief".to_string(),
        };
        let message: Message = turn.into();
        assert_eq!(message, Message::system("Be brief"));
    }
}
