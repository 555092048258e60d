use lingo_interface::{AsyncTranslator, TranslationOutput};

/// Returns the query untouched. Stands in for a real provider when wiring
/// the facade without network access.
pub struct EchoTranslator {}

impl EchoTranslator {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for EchoTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AsyncTranslator for EchoTranslator {
    async fn translate(
        &self,
        query: &str,
        _: Option<&str>,
        _: &str,
    ) -> anyhow::Result<TranslationOutput> {
        Ok(TranslationOutput {
            text: query.to_owned(),
            lang: None,
        })
    }
}
