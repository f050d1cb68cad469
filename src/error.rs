//! Startup errors
//!
//! Simulation and drawing never fail; only wiring up the host can.

use thiserror::Error;

/// Errors that can occur while bringing the game up.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id '{id}'")]
    MissingElement { id: String },

    #[error("element '{id}' is not a canvas")]
    NotACanvas { id: String },

    #[error("canvas has no 2d context")]
    NoContext2d,

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Js(format!("{value:?}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
