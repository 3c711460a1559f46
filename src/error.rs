//! Error types shared by every page feature.
//!
//! Everything here is a startup precondition: once a feature is bound, its
//! event handlers never produce errors of their own.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Rejected typewriter input. Raised before any state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhraseList,
    #[error("phrase {index} is empty")]
    EmptyPhrase { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error(transparent)]
    Typewriter(#[from] TypewriterError),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        PortfolioError::Js(msg)
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<TypewriterError> for JsValue {
    fn from(err: TypewriterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;
