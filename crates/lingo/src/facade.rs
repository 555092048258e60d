use lingo_interface::{
    AsyncTranslator, TranslationOutput, catalog,
    error::{ApiError, Error},
};
use log::{debug, warn};

/// A validated translation request. An auto-detect source is stored as
/// `None`; the sentinel code never leaves the constructor, and it is never
/// accepted as a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source: Option<String>,
    target: String,
}

impl TranslationRequest {
    pub fn new(text: &str, source: &str, target: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Err(Error::InvalidRequest("query text is blank"));
        }
        if catalog::is_auto(target) {
            return Err(Error::InvalidRequest("target language cannot be auto-detect"));
        }
        if !catalog::contains_code(target) {
            return Err(Error::UnknownLanguage(target.to_owned()));
        }
        let source = if catalog::is_auto(source) {
            None
        } else if catalog::contains_code(source) {
            Some(source.to_owned())
        } else {
            return Err(Error::UnknownLanguage(source.to_owned()));
        };
        Ok(Self {
            text: text.to_owned(),
            source,
            target: target.to_owned(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Outcome of one translate call. Exactly one variant; `Success` carries the
/// provider output verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    Success(TranslationOutput),
    Failure(ApiError),
}

impl TranslationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Stateless wrapper that turns provider calls into [`TranslationResult`]s.
/// One network round trip per invocation, no retry, no cache.
pub struct TranslationFacade<T> {
    provider: T,
}

impl<T: AsyncTranslator> TranslationFacade<T> {
    pub fn new(provider: T) -> Self {
        Self { provider }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        debug!(
            "translate {} chars, {} -> {}",
            request.text.chars().count(),
            request.source().unwrap_or("auto"),
            request.target
        );
        match self
            .provider
            .translate(&request.text, request.source(), &request.target)
            .await
        {
            Ok(output) => TranslationResult::Success(output),
            Err(err) => {
                let reason = classify(err);
                warn!("translation failed: {reason}");
                TranslationResult::Failure(reason)
            }
        }
    }
}

/// Providers surface typed failures where they can; anything untyped is
/// folded into the generic provider category with its root cause.
fn classify(err: anyhow::Error) -> ApiError {
    match err.downcast::<ApiError>() {
        Ok(api) => api,
        Err(other) => ApiError::Provider(other.root_cause().to_string()),
    }
}
