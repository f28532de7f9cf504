use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Server-issued challenge. One-shot: every submission attempt consumes it,
/// and the client never checks the answer itself.
pub struct CaptchaChallenge {
    pub id: String,
    pub question: String,
}
