pub mod catalog;
pub mod error;

#[async_trait::async_trait]
pub trait AsyncTranslator: Send + Sync {
    /// `from = None` asks the provider to detect the source language.
    /// Providers map their own transport failures to `error::ApiError`
    /// before returning; anything else is folded into a generic provider
    /// failure at the facade boundary.
    async fn translate(
        &self,
        query: &str,
        from: Option<&str>,
        to: &str,
    ) -> anyhow::Result<TranslationOutput>;
}

/// Translation result containing the translation and the language
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationOutput {
    /// Translation
    pub text: String,
    /// Detected source language code, when the provider reports one
    pub lang: Option<String>,
}
