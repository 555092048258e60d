use lingo_interface::{catalog, error::Error};
use log::debug;

use crate::facade::{TranslationRequest, TranslationResult};

/// Common phrases offered as one-click input.
pub const QUICK_PHRASES: &[&str] = &[
    "Hello, how are you?",
    "Thank you very much",
    "What is your name?",
    "Where is the bathroom?",
    "How much does this cost?",
    "I need help",
    "Good morning",
    "Good night",
];

/// Interaction state for one interactive translation session. Owned by the
/// rendering layer and threaded through its handlers; dropped when the
/// session ends, nothing persists.
#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    source: String,
    target: String,
    last_result: Option<TranslationResult>,
    completed: u64,
}

impl Session {
    /// Starts with the catalog's first pair selected: English as source,
    /// Urdu as target.
    pub fn new() -> Self {
        let entries = catalog::entries();
        Self {
            input: String::new(),
            source: entries[0].0.to_owned(),
            target: entries[1].0.to_owned(),
            last_result: None,
            completed: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Selected source display name. May be the auto-detect sentinel.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn last_result(&self) -> Option<&TranslationResult> {
        self.last_result.as_ref()
    }

    /// Successful translations recorded so far this session.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// The gate before [`crate::TranslationFacade::translate`]: blank input
    /// never produces a request, the caller renders a placeholder instead.
    pub fn wants_translation(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Replaces the input text. Any previous result is stale and dropped.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_owned();
        self.last_result = None;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.last_result = None;
    }

    /// Loads one of [`QUICK_PHRASES`] into the input. Out-of-range indices
    /// are ignored.
    pub fn pick_phrase(&mut self, index: usize) {
        if let Some(phrase) = QUICK_PHRASES.get(index) {
            self.set_input(phrase);
        }
    }

    pub fn select_source(&mut self, name: &str) -> Result<(), Error> {
        catalog::resolve(name)?;
        self.source = name.to_owned();
        Ok(())
    }

    /// The auto-detect sentinel is only offered in the source list, so it is
    /// rejected here rather than surfacing later as an invalid request.
    pub fn select_target(&mut self, name: &str) -> Result<(), Error> {
        if name == catalog::AUTO_DETECT {
            return Err(Error::InvalidRequest("target language cannot be auto-detect"));
        }
        catalog::resolve(name)?;
        self.target = name.to_owned();
        Ok(())
    }

    /// Exchanges the language pair. Auto-detect is never a valid target, so
    /// the swap is skipped while the source is the sentinel.
    pub fn swap_languages(&mut self) {
        if self.source != catalog::AUTO_DETECT {
            std::mem::swap(&mut self.source, &mut self.target);
        }
    }

    /// Resolves the current selection into a request for the facade.
    pub fn request(&self) -> Result<TranslationRequest, Error> {
        let source = catalog::resolve(&self.source)?;
        let target = catalog::resolve(&self.target)?;
        TranslationRequest::new(&self.input, source, target)
    }

    /// Stores the outcome of a translate call. The counter moves here and
    /// nowhere else, once per `Success`, never on `Failure`.
    pub fn record(&mut self, result: TranslationResult) {
        if result.is_success() {
            self.completed += 1;
            debug!("session translations completed: {}", self.completed);
        }
        self.last_result = Some(result);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
