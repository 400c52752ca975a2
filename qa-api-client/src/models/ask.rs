use serde::{Deserialize, Serialize};

/// JSON body of `POST /api/ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Natural language question.
    pub question: String,
}

/// One supporting excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub text: String,
    pub document_name: String,
}

/// Response payload of `POST /api/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    /// May be absent when the server found nothing relevant.
    #[serde(default)]
    pub citations: Vec<Citation>,
}
