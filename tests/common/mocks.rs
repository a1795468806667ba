#![allow(dead_code)]

use async_trait::async_trait;
use gemini_relay::{
    Error, Result,
    llm::{ContentPart, GenerationClient, GenerationRequest, GenerationResponse},
    relay::Replier,
    storage::ImageRef,
};
use std::sync::{Arc, Mutex};

/// Mock generation client for testing
#[derive(Debug)]
pub struct MockGenerationClient {
    pub outcomes: Arc<Mutex<Vec<std::result::Result<GenerationResponse, String>>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub error: Option<String>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<GenerationResponse>) -> Self {
        *self.outcomes.lock().unwrap() = responses.into_iter().map(Ok).collect();
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn add_response(&self, response: GenerationResponse) {
        self.outcomes.lock().unwrap().push(Ok(response));
    }

    pub fn add_failure(&self, error: &str) {
        self.outcomes.lock().unwrap().push(Err(error.to_string()));
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        outcomes.remove(0).map_err(Error::llm)
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentReply {
    Text(String),
    Photo(ImageRef),
}

/// Replier that records everything sent to the chat
#[derive(Debug, Default)]
pub struct RecordingReplier {
    pub sent: Arc<Mutex<Vec<SentReply>>>,
    pub fail_photos: bool,
}

impl RecordingReplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_photos() -> Self {
        Self {
            fail_photos: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Replier for RecordingReplier {
    async fn reply_text(&self, text: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(SentReply::Text(text.to_string()));
        Ok(())
    }

    async fn reply_photo(&self, image: &ImageRef) -> Result<()> {
        if self.fail_photos {
            return Err(Error::internal("photo upload rejected"));
        }
        self.sent
            .lock()
            .unwrap()
            .push(SentReply::Photo(image.clone()));
        Ok(())
    }
}

// Helper functions for creating test data

pub fn create_text_response(text: &str) -> GenerationResponse {
    GenerationResponse::with_parts(vec![ContentPart::Text(text.to_string())])
}

pub fn create_image_part(mime_type: &str, data: &[u8]) -> ContentPart {
    ContentPart::InlineData {
        mime_type: mime_type.to_string(),
        data: data.to_vec(),
    }
}
