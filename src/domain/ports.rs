use async_trait::async_trait;

// Boxed error crossing the provider boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// Port for the model backend that turns a prompt into suggestion text.
// Handlers depend on this trait, not the concrete client implementation.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BoxError>;
}
