use super::{
    classifier::classify,
    interpreter::interpret,
    types::{InboundMessage, OutboundAction, Replier},
};
use crate::{Result, llm::GenerationClient, storage::ImageStore};
use std::{sync::Arc, time::Instant};
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Handles one inbound message at a time per call; holds no per-message state,
/// so a single instance is shared by every concurrent handler.
pub struct Relay {
    generation: Arc<dyn GenerationClient>,
    images: Arc<dyn ImageStore>,
}

impl Relay {
    pub fn new(generation: Arc<dyn GenerationClient>, images: Arc<dyn ImageStore>) -> Self {
        Self { generation, images }
    }

    /// Processes the message and answers any fault with the generic error reply.
    /// Never fails.
    pub async fn handle(&self, message: InboundMessage, replier: &dyn Replier) {
        let span = info_span!(
            "relay",
            message_id = %Uuid::new_v4(),
            kind = %message.kind()
        );

        async {
            let outcome = self.process(message, replier).await;
            self.settle(outcome, replier).await;
        }
        .instrument(span)
        .await
    }

    /// classify -> generate -> interpret -> reply, stopping at the first fault.
    pub async fn process(&self, message: InboundMessage, replier: &dyn Replier) -> Result<()> {
        let origin = message.kind();
        let request = classify(&message);
        debug!(
            prompt_len = request.prompt.len(),
            modalities = ?request.response_modalities,
            "Classified inbound message"
        );

        let started = Instant::now();
        let response = self.generation.generate(request).await?;
        info!("Generation finished in {:?}", started.elapsed());

        let actions = interpret(response, origin, self.images.as_ref()).await?;
        debug!("Executing {} outbound actions", actions.len());

        for action in &actions {
            execute(action, replier).await?;
        }

        Ok(())
    }

    /// Single fault boundary: a failed outcome becomes exactly one generic reply.
    pub async fn settle(&self, outcome: Result<()>, replier: &dyn Replier) {
        let Err(e) = outcome else {
            return;
        };

        error!("Failed to handle message: {}", e);
        let reply = OutboundAction::ReplyError(GENERIC_ERROR_MESSAGE.to_string());
        if let Err(reply_err) = execute(&reply, replier).await {
            error!("Failed to deliver error reply: {}", reply_err);
        }
    }
}

async fn execute(action: &OutboundAction, replier: &dyn Replier) -> Result<()> {
    match action {
        OutboundAction::ReplyText(text) | OutboundAction::ReplyError(text) => {
            replier.reply_text(text).await
        }
        OutboundAction::ReplyPhoto(image) => replier.reply_photo(image).await,
    }
}
