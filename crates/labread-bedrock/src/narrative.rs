//! Narrative prompt construction and invocation.

use std::future::Future;
use std::pin::Pin;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use labread_core::models::level::Level;

use crate::error::BedrockError;

const NARRATIVE_SYSTEM_PROMPT: &str = "\
You explain laboratory reports to patients in plain language. \
Never diagnose a condition, name a disease, or recommend a treatment. \
Describe only whether values sit below, within, or above their typical ranges. \
Write one short summary paragraph, then a numbered list of at most five \
questions the patient could ask their doctor. Do not add headings.";

/// A prompt ready to send to a text-completion model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativePrompt {
    pub system: String,
    pub user: String,
}

/// Build the prompt for a report at the given reading level.
pub fn build_prompt(report_text: &str, level: Level) -> NarrativePrompt {
    let audience = match level {
        Level::Standard => "Write for an adult with no medical training.",
        Level::Child => {
            "Write for a child of about ten years old, using short sentences and everyday words."
        }
    };

    let mut user = String::from("<report>\n");
    user.push_str(report_text.trim());
    user.push_str("\n</report>");

    NarrativePrompt {
        system: format!("{NARRATIVE_SYSTEM_PROMPT} {audience}"),
        user,
    }
}

pub type NarrativeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, BedrockError>> + Send + 'a>>;

/// Anything that can turn a prompt into narrative text.
pub trait NarrativeSource: Send + Sync {
    fn complete<'a>(&'a self, prompt: &'a NarrativePrompt) -> NarrativeFuture<'a>;
}

/// [`NarrativeSource`] backed by a Bedrock model.
#[derive(Debug, Clone)]
pub struct BedrockNarrator {
    client: Client,
    model_id: String,
}

impl BedrockNarrator {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn converse(&self, prompt: &NarrativePrompt) -> Result<String, BedrockError> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, model = %self.model_id, "requesting narrative");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(prompt.system.clone()))
            .messages(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::Text(prompt.user.clone()))
                    .build()
                    .map_err(|e| BedrockError::Invocation(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(BedrockError::EmptyResponse);
        }

        info!(request_id = %request_id, text_len = text.len(), "narrative received");

        Ok(text)
    }
}

impl NarrativeSource for BedrockNarrator {
    fn complete<'a>(&'a self, prompt: &'a NarrativePrompt) -> NarrativeFuture<'a> {
        Box::pin(self.converse(prompt))
    }
}
