use qa_api_client::AskResponse;
use tracing::warn;

use crate::backend::QaBackend;

/// Longest question accepted by the question box.
pub const MAX_QUESTION_CHARS: usize = 500;

/// Question/answer panel with clickable citations.
#[derive(Debug, Default)]
pub struct QaState {
    pub question: String,
    pub response: Option<AskResponse>,
    pub asking: bool,
    pub error: Option<String>,
    pub highlighted_citation: Option<usize>,
}

impl QaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit_question<B: QaBackend>(&mut self, backend: &B, text: &str) {
        self.question = text.to_string();

        if text.trim().is_empty() {
            self.error = Some("Enter a question".to_string());
            return;
        }
        if text.chars().count() > MAX_QUESTION_CHARS {
            self.error = Some(format!(
                "Question must be at most {MAX_QUESTION_CHARS} characters"
            ));
            return;
        }

        self.asking = true;
        self.error = None;
        self.response = None;
        self.highlighted_citation = None;

        match backend.ask(text).await {
            Ok(resp) => self.response = Some(resp),
            Err(e) => {
                warn!(error = %e, "question failed");
                self.error = Some(e.user_message());
            }
        }
        self.asking = false;
    }

    /// Highlights citation `index`, or removes the highlight if it is already on.
    /// Indices past the last citation are ignored.
    pub fn toggle_citation(&mut self, index: usize) {
        let count = self.response.as_ref().map_or(0, |r| r.citations.len());
        if index >= count {
            return;
        }
        self.highlighted_citation = match self.highlighted_citation {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    /// `"<chars>/500"`.
    pub fn char_counter(&self) -> String {
        format!("{}/{}", self.question.chars().count(), MAX_QUESTION_CHARS)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
