use serde::{Deserialize, Serialize};

/// Query string carried by signup and unregister requests
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantQuery {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
