//! AI assistant collaborator seam for Dealer365.
//!
//! The assistant panel sends a free-text prompt to a text-generation
//! provider and shows its free-text reply. The provider is behind
//! [`TextGenerator`] so the mockup can ship a canned in-memory
//! implementation; any failure is caught and replaced by a fixed
//! apology string, the only recognized failure in the system.

use async_trait::async_trait;
use thiserror::Error;

/// The fixed user-visible reply substituted when the provider fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't process that right now. Please try again in a moment.";

/// Errors a text-generation provider can surface.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The provider call failed or rejected.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The prompt was empty after trimming.
    #[error("Empty prompt")]
    EmptyPrompt,
}

/// A text-generation collaborator: plain text in, plain text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for a free-text prompt.
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

/// The assistant the UI talks to.
///
/// Wraps a provider and absorbs its failures: [`Assistant::ask`] always
/// returns a displayable string.
pub struct Assistant<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Assistant<G> {
    /// Create an assistant over a provider.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Ask the assistant a question.
    ///
    /// Substitutes [`FALLBACK_REPLY`] on any failure, so the reply is
    /// always displayable.
    pub async fn ask(&self, prompt: &str) -> String {
        match self.try_ask(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "assistant request failed, using fallback");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Ask the assistant, surfacing the error instead of the fallback.
    ///
    /// Trims the prompt; a prompt that is blank after trimming is
    /// rejected with [`AssistantError::EmptyPrompt`] without reaching
    /// the provider.
    pub async fn try_ask(&self, prompt: &str) -> Result<String, AssistantError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        self.generator.generate(prompt).await
    }
}

/// Deterministic keyword-matched provider used by the mockup UI.
///
/// Stands in for the external generative text service; replies are
/// canned per topic so the panel demos without a network.
#[derive(Debug, Clone, Default)]
pub struct CannedAssistant;

impl CannedAssistant {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextGenerator for CannedAssistant {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let prompt = prompt.to_lowercase();
        let reply = if prompt.contains("price") || prompt.contains("cost") {
            "Configured prices update live as you select options: the trim's base \
             price plus every selected option. Open the summary drawer in the \
             configurator for the itemized breakdown."
        } else if prompt.contains("deal") || prompt.contains("pipeline") {
            "The pipeline board tracks every deal from Lead to Delivered. Use the \
             advance button on a card to move it one column right, and check the \
             column totals for stage value."
        } else if prompt.contains("compare") {
            "Pick up to three models on the selection screen and open Compare for \
             a side-by-side spec table."
        } else if prompt.contains("electric") || prompt.contains("ev") {
            "Filter the model list by the Electric powertrain to see EV range and \
             pricing at a glance."
        } else {
            "I can help with model selection, configuring a vehicle, pricing, and \
             your deals pipeline. What would you like to know?"
        };
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that always fails, for exercising the fallback path.
    struct FailingAssistant;

    #[async_trait]
    impl TextGenerator for FailingAssistant {
        async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
            Err(AssistantError::Provider("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_ask_returns_provider_reply() {
        let assistant = Assistant::new(CannedAssistant::new());
        let reply = assistant.ask("How does the price update?").await;
        assert!(reply.contains("base"));
        assert_ne!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_provider_failure_yields_fallback() {
        let assistant = Assistant::new(FailingAssistant);
        assert_eq!(assistant.ask("anything").await, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_blank_prompt_yields_fallback() {
        let assistant = Assistant::new(CannedAssistant::new());
        assert_eq!(assistant.ask("   ").await, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected_before_the_provider() {
        let assistant = Assistant::new(FailingAssistant);
        assert!(matches!(
            assistant.try_ask("  \n ").await,
            Err(AssistantError::EmptyPrompt)
        ));
    }

    #[tokio::test]
    async fn test_canned_replies_are_topical() {
        let canned = CannedAssistant::new();
        let pipeline = canned.generate("show my deals").await.unwrap();
        assert!(pipeline.contains("pipeline") || pipeline.contains("Lead"));

        let default = canned.generate("hello there").await.unwrap();
        assert!(default.contains("help"));
    }
}
