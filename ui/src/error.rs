//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;
use wasm_bindgen::JsValue;

// *************
// *** Error ***
// *************

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("browser error: {0}")]
    JsValueError(String),

    #[error("no file selected")]
    NoFile,
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Error::JsValueError(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
