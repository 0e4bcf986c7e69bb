use thiserror::Error;
use wasm_bindgen::{JsError, JsValue};

/// Failures of the DOM substrate. The game itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id {0:?}")]
    ContainerNotFound(String),

    #[error("already mounted")]
    AlreadyMounted,

    #[error("invalid mount options: {0}")]
    InvalidOptions(String),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, MountError>;
