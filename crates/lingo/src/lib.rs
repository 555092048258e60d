mod facade;
mod session;

pub use lingo_interface::{
    AsyncTranslator, TranslationOutput, catalog,
    error::{ApiError, Error},
};

pub use lingo_echo::EchoTranslator;
pub use lingo_google::GoogleTranslator;

pub use facade::{TranslationFacade, TranslationRequest, TranslationResult};
pub use session::{QUICK_PHRASES, Session};
